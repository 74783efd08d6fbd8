use anyhow::{anyhow, bail, Result};
use ner_sensitivity::utils::logger::init_logger;
use ner_sensitivity::{all_labels, Tagger, TaggerConfig};
use std::env;

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Request {
    List,
    Labels(Vec<String>),
}

// `--list` must stand alone; anything else is taken as detector labels
fn parse_request(args: &[String]) -> Result<Request> {
    match args {
        [] => Err(anyhow!("Missing entity label argument")),
        [flag] if flag == "--list" => Ok(Request::List),
        [flag, rest @ ..] if flag == "--list" => {
            bail!("--list takes no further arguments, got: {}", rest.join(" "))
        }
        labels => Ok(Request::Labels(labels.to_vec())),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let request = match parse_request(&args[1..]) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Usage: {} <LABEL>... | --list", args[0]);
            return Err(e);
        }
    };

    let config = TaggerConfig::load(env::var("NER_TAGGER_CONFIG").ok().as_deref())?;
    init_logger(config.log_dir.as_deref())?;

    let tagger = Tagger::new(&config)?;

    let tags = match request {
        Request::List => tagger.tag_all(all_labels())?,
        Request::Labels(labels) => tagger.tag_all(labels.iter().map(String::as_str))?,
    };

    println!("{}", serde_json::to_string_pretty(&tags)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_list_alone() {
        assert_eq!(parse_request(&args(&["--list"])).unwrap(), Request::List);
    }

    #[test]
    fn test_list_rejects_trailing_labels() {
        assert!(parse_request(&args(&["--list", "US_SSN"])).is_err());
    }

    #[test]
    fn test_labels_and_missing_args() {
        assert_eq!(
            parse_request(&args(&["PERSON", "URL"])).unwrap(),
            Request::Labels(args(&["PERSON", "URL"]))
        );
        assert!(parse_request(&[]).is_err());
    }
}
