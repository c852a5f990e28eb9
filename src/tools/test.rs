#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use uuid::Uuid;

    /// A fresh folder under the system temporary directory. Tests run in parallel,
    /// so the name has to be unique.
    pub fn temp_dir() -> PathBuf {
        let buf = std::env::temp_dir().join(format!("club-portal-{}", Uuid::new_v4()));
        fs::create_dir(&buf).unwrap();

        buf
    }
}
