use crate::cli::Args;
use crate::error::{Result, StoreError};

/// Records inserted when none are given on the command line
pub const SEED_RECORDS: [(i32, &str, f32); 3] =
    [(101, "Alice", 3.8), (102, "Bob", 3.5), (103, "Charlie", 4.0)];

/// A record to insert, as parsed from `ID,NAME,GPA`
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSpec {
    pub id: i32,
    pub name: String,
    pub gpa: f32,
}

impl RecordSpec {
    /// Parse `ID,NAME,GPA`
    ///
    /// The identifier ends at the first comma and the GPA starts after the
    /// last one, so names may themselves contain commas.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |why: &str| StoreError::InvalidRecord(format!("{}: {}", spec, why));

        let (id, rest) = spec
            .split_once(',')
            .ok_or_else(|| invalid("expected ID,NAME,GPA"))?;
        let (name, gpa) = rest
            .rsplit_once(',')
            .ok_or_else(|| invalid("expected ID,NAME,GPA"))?;

        let id = id
            .trim()
            .parse::<i32>()
            .map_err(|_| invalid("identifier is not an integer"))?;
        let gpa = gpa
            .trim()
            .parse::<f32>()
            .map_err(|_| invalid("GPA is not a number"))?;

        Ok(RecordSpec {
            id,
            name: name.to_string(),
            gpa,
        })
    }
}

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub capacity: usize,
    pub records: Vec<RecordSpec>,
    pub find_id: i32,
    pub verbose: bool,
    pub output_file: Option<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let records: Result<Vec<RecordSpec>> = if args.records.is_empty() {
            Ok(SEED_RECORDS
                .iter()
                .map(|&(id, name, gpa)| RecordSpec {
                    id,
                    name: name.to_string(),
                    gpa,
                })
                .collect())
        } else {
            args.records.iter().map(|s| RecordSpec::parse(s)).collect()
        };

        Ok(Config {
            capacity: args.capacity,
            records: records?,
            find_id: args.find,
            verbose: args.verbose,
            output_file: args.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_simple() {
        let spec = RecordSpec::parse("104,Dana,3.2").unwrap();
        assert_eq!(spec.id, 104);
        assert_eq!(spec.name, "Dana");
        assert_eq!(spec.gpa, 3.2);
    }

    #[test]
    fn test_parse_name_with_comma() {
        let spec = RecordSpec::parse("7,Smith, John,2.75").unwrap();
        assert_eq!(spec.name, "Smith, John");
        assert_eq!(spec.gpa, 2.75);
    }

    #[test]
    fn test_parse_empty_name() {
        let spec = RecordSpec::parse("1,,0").unwrap();
        assert_eq!(spec.name, "");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(RecordSpec::parse("104").is_err());
        assert!(RecordSpec::parse("104,Dana").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(RecordSpec::parse("abc,Dana,3.2").is_err());
        assert!(RecordSpec::parse("104,Dana,high").is_err());
    }

    #[test]
    fn test_seed_records_by_default() {
        let args = Args::parse_from(["studentdb"]);
        let config = Config::from_args(&args).unwrap();
        let ids: Vec<i32> = config.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
        assert_eq!(config.capacity, 10);
        assert_eq!(config.find_id, 102);
    }

    #[test]
    fn test_explicit_records_replace_seed() {
        let args = Args::parse_from(["studentdb", "-r", "1,A,1.5"]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(
            config.records,
            vec![RecordSpec {
                id: 1,
                name: "A".to_string(),
                gpa: 1.5
            }]
        );
    }

    #[test]
    fn test_invalid_record_is_error() {
        let args = Args::parse_from(["studentdb", "-r", "oops"]);
        assert!(matches!(
            Config::from_args(&args),
            Err(StoreError::InvalidRecord(_))
        ));
    }
}
