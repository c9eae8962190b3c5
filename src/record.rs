use std::fmt;

use crate::name::BoundedName;

/// One student's entry in the store
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: i32,
    pub name: BoundedName,
    pub gpa: f32,
}

impl Record {
    pub fn new(id: i32, name: &str, gpa: f32) -> Self {
        Self {
            id,
            name: BoundedName::new(name),
            gpa,
        }
    }
}

/// Listing row: `ID: 101   | Name: Alice           | GPA: 3.80`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<5} | Name: {:<15} | GPA: {:.2}",
            self.id, self.name, self.gpa
        )
    }
}
