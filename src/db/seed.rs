//! CSV files used to seed a database and to export it back.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

pub fn write_to<T: Serialize>(path: &Path, data: &[T]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Bad record in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Category, Question};

    #[test]
    fn categories_use_type_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATEGORIES_FILE);
        let categories = vec![
            Category {
                id: 1,
                kind: "Science".to_owned(),
            },
            Category {
                id: 2,
                kind: "Art".to_owned(),
            },
        ];
        write_to(&path, &categories).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id,type\n"));
        assert_eq!(read_from::<Category>(&path).unwrap(), categories);
    }

    #[test]
    fn questions_with_commas_survive_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(QUESTIONS_FILE);
        let questions = vec![Question {
            id: 7,
            question: "Name, rank and number?".to_owned(),
            answer: "\"Private\"".to_owned(),
            category: 4,
            difficulty: 2,
        }];
        write_to(&path, &questions).unwrap();
        assert_eq!(read_from::<Question>(&path).unwrap(), questions);
    }

    #[test]
    fn bundled_seed_data_parses() {
        let seed = Path::new(env!("CARGO_MANIFEST_DIR")).join("seed");
        let categories: Vec<Category> = read_from(&seed.join(CATEGORIES_FILE)).unwrap();
        let questions: Vec<Question> = read_from(&seed.join(QUESTIONS_FILE)).unwrap();
        assert_eq!(categories.len(), 6);
        assert!(questions
            .iter()
            .all(|q| categories.iter().any(|c| c.id == q.category)));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_from::<Category>(&dir.path().join("nope.csv")).unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }
}
