//! The plain-text `rule_info.txt` record describing a run.
//!
//! One `Key: value` pair per line. Lines are written in insertion order;
//! the activity score is appended after the run completes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use hrot_core::Rule;
use indexmap::IndexMap;

/// File name of the run-info record inside an output folder.
pub const RUN_INFO_FILE: &str = "rule_info.txt";

/// Ordered key/value record of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunInfo {
    entries: IndexMap<String, String>,
}

impl RunInfo {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The header written before a daily run: seed, rule string,
    /// generation budget, and neighbourhood name.
    pub fn for_rule(seed: u64, rule: &Rule, generations: u64) -> Self {
        let mut info = Self::new();
        info.insert("Seed", seed.to_string());
        info.insert("Rule", rule.to_string());
        info.insert("Generations", generations.to_string());
        info.insert("Neighborhood", rule.neighborhood().name());
        info
    }

    /// Set `key` to `value`, keeping the original position if the key
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `Key: value` lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (k, v) in self.iter() {
            out.push_str(k);
            out.push_str(": ");
            out.push_str(v);
            out.push('\n');
        }
        out
    }

    /// Path of the record inside `folder`.
    pub fn path(folder: &Path) -> PathBuf {
        folder.join(RUN_INFO_FILE)
    }

    /// Write (truncating) the record to `<folder>/rule_info.txt`,
    /// creating `folder` if needed.
    pub fn write(&self, folder: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(folder)?;
        let path = Self::path(folder);
        let mut f = File::create(&path)?;
        f.write_all(self.render().as_bytes())?;
        Ok(path)
    }

    /// Append `Activity: <score>%` with two decimals to
    /// `<folder>/rule_info.txt`, creating the file if it does not exist.
    pub fn append_activity(folder: &Path, score: f64) -> io::Result<()> {
        fs::create_dir_all(folder)?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Self::path(folder))?;
        writeln!(f, "Activity: {score:.2}%")
    }

    /// Parse a record previously written by [`write`](Self::write).
    ///
    /// Lines without a `": "` separator are ignored.
    pub fn read(path: &Path) -> io::Result<Self> {
        let r = BufReader::new(File::open(path)?);
        let mut info = Self::new();
        for line in r.lines() {
            let line = line?;
            if let Some((k, v)) = line.split_once(": ") {
                info.insert(k, v);
            }
        }
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrot_core::Neighborhood;
    use hrot_test_utils::TempOutputDir;

    #[test]
    fn for_rule_fields_in_order() {
        let rule = Rule::new(2, 3, Neighborhood::VonNeumann)
            .unwrap()
            .with_survive([1, 2])
            .with_birth([2]);
        let info = RunInfo::for_rule(20240115, &rule, 500);
        assert_eq!(
            info.render(),
            "Seed: 20240115\nRule: R2,C3,S1-2,B2,NN\nGenerations: 500\nNeighborhood: Von Neumann\n"
        );
    }

    #[test]
    fn insert_existing_key_keeps_position() {
        let mut info = RunInfo::new();
        info.insert("A", "1");
        info.insert("B", "2");
        info.insert("A", "3");
        let keys: Vec<_> = info.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(info.get("A"), Some("3"));
        assert_eq!(info.len(), 2);
    }

    #[test]
    fn write_append_read() {
        let dir = TempOutputDir::new("run_info_write");
        let info = RunInfo::for_rule(7, &Rule::conway(), 10);
        let path = info.write(dir.path()).unwrap();
        RunInfo::append_activity(dir.path(), 12.345).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("Neighborhood: Moore\nActivity: 12.35%\n"));

        let back = RunInfo::read(&path).unwrap();
        assert_eq!(back.get("Rule"), Some("R1,C2,S2-3,B3"));
        assert_eq!(back.get("Activity"), Some("12.35%"));
    }

    #[test]
    fn write_truncates_previous_record() {
        let dir = TempOutputDir::new("run_info_truncate");
        let mut info = RunInfo::new();
        info.insert("Old", "x");
        info.write(dir.path()).unwrap();
        RunInfo::for_rule(1, &Rule::conway(), 1)
            .write(dir.path())
            .unwrap();
        let back = RunInfo::read(&RunInfo::path(dir.path())).unwrap();
        assert_eq!(back.get("Old"), None);
        assert_eq!(back.len(), 4);
    }
}
