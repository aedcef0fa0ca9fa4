use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matches_to_find: usize,
    pub student_file: String,
    pub program_file: String,
    pub output_file: String,
    // The first program row is a header-like record and stays out of the
    // secondary tier unless this is switched off
    #[serde(default = "default_exclude_first_program")]
    pub exclude_first_program: bool,
    pub random_seed: Option<u64>,
}

fn default_exclude_first_program() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matches_to_find: 3,
            student_file: "applicant_data.csv".to_string(),
            program_file: "program_data.csv".to_string(),
            output_file: "match_results.csv".to_string(),
            exclude_first_program: true,
            random_seed: None,
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub organization: String,
    pub url: String,
    pub description: String,
    pub interests: Vec<String>,
}

impl Student {
    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|t| t == tag)
    }
}

impl Program {
    /// Number of interest tags this program shares with the student
    pub fn shared_interest_count(&self, student: &Student) -> usize {
        self.interests
            .iter()
            .filter(|tag| student.has_interest(tag))
            .count()
    }

    /// Whether the program's interests are the same set as the student's.
    /// Both sides are deduplicated, so equal length plus containment is
    /// enough; the column scan order on either side does not matter.
    pub fn interests_match(&self, student: &Student) -> bool {
        self.interests.len() == student.interests.len()
            && self.interests.iter().all(|tag| student.has_interest(tag))
    }
}

/// Ordered shortlist of programs recommended for one student, computed once
/// per student. The four field views are derived straight from the list and
/// always share its length and order.
#[derive(Debug, Clone, Default)]
pub struct RankedMatches {
    pub programs: Vec<Program>,
}

impl RankedMatches {
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.programs.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn organizations(&self) -> Vec<&str> {
        self.programs.iter().map(|p| p.organization.as_str()).collect()
    }

    pub fn urls(&self) -> Vec<&str> {
        self.programs.iter().map(|p| p.url.as_str()).collect()
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.programs.iter().map(|p| p.description.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_with_interests(interests: &[&str]) -> Program {
        Program {
            name: "P".to_string(),
            organization: "O".to_string(),
            url: "U".to_string(),
            description: "D".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn student_with_interests(interests: &[&str]) -> Student {
        Student {
            id: "S".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn interests_match_ignores_scan_order() {
        let student = student_with_interests(&["Audio/Music Production", "Drawing/Graphic Design"]);
        let program = program_with_interests(&["Drawing/Graphic Design", "Audio/Music Production"]);
        assert!(program.interests_match(&student));
    }

    #[test]
    fn interests_match_rejects_subsets() {
        let student = student_with_interests(&["Artmaking", "Storytelling"]);
        let program = program_with_interests(&["Artmaking"]);
        assert!(!program.interests_match(&student));
        assert_eq!(program.shared_interest_count(&student), 1);
    }

    #[test]
    fn empty_sets_match() {
        let student = student_with_interests(&[]);
        let program = program_with_interests(&[]);
        assert!(program.interests_match(&student));
    }

    #[test]
    fn config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let config = Config::default();
        config.save_to_file(path).unwrap();
        let loaded = Config::load_from_file(path).unwrap();

        assert_eq!(loaded.matches_to_find, config.matches_to_find);
        assert_eq!(loaded.output_file, config.output_file);
        assert!(loaded.exclude_first_program);
    }

    #[test]
    fn exclude_first_program_defaults_to_true() {
        let config: Config = toml::from_str(
            "matches_to_find = 2\n\
             student_file = \"s.csv\"\n\
             program_file = \"p.csv\"\n\
             output_file = \"out.csv\"\n",
        )
        .unwrap();
        assert!(config.exclude_first_program);
        assert_eq!(config.random_seed, None);
    }
}
