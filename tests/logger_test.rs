#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ner_sensitivity::utils::logger::init_logger;
    use ner_sensitivity::Tagger;
    use std::fs;

    #[test]
    fn test_file_logger() -> Result<()> {
        let dir = std::env::temp_dir()
            .join(format!("ner_sensitivity_logs_{}", std::process::id()));
        let dir_str = dir.to_string_lossy().to_string();

        init_logger(Some(&dir_str))?;
        assert!(Tagger::default().tag("NOT_A_REAL_LABEL").is_err());

        let files: Vec<_> = fs::read_dir(&dir)?.collect::<std::io::Result<_>>()?;
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().to_string_lossy().to_string();
        assert!(name.starts_with("ner_sensitivity_") && name.ends_with(".log"));

        // A second global subscriber is refused, and leaves nothing on disk
        assert!(init_logger(None).is_err());
        assert!(init_logger(Some(&dir_str)).is_err());
        assert_eq!(fs::read_dir(&dir)?.count(), 1);

        let other = dir.join("second");
        assert!(init_logger(Some(&other.to_string_lossy())).is_err());
        assert!(!other.exists());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
