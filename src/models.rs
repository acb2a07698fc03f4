use serde::Serialize;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated row of mock person data. `code` is the row's position in its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub code: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
}

impl Person {
    pub fn new(code: u64, name: &str, phone: &str, email: &str, gender: Gender) -> Self {
        Self {
            code,
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            gender,
        }
    }

    /// The record's cells in header order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.code.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.gender.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_display_matches_pool_labels() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.as_str(), "Female");
    }

    #[test]
    fn cells_follow_header_order() {
        let person = Person::new(
            7,
            "Mary Bill",
            "(55) 4458-9965",
            "mary.bill@example.com",
            Gender::Female,
        );
        assert_eq!(
            person.cells(),
            [
                "7".to_string(),
                "Mary Bill".to_string(),
                "(55) 4458-9965".to_string(),
                "mary.bill@example.com".to_string(),
                "Female".to_string(),
            ]
        );
    }

    #[test]
    fn serializes_gender_as_label() {
        let person = Person::new(
            0,
            "Jhon Jhon",
            "(55) 4458-9965",
            "jhon.jhon@example.com",
            Gender::Male,
        );
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["gender"], "Male");
        assert_eq!(json["code"], 0);
    }
}
