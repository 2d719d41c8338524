use serde::{Deserialize, Serialize};
use std::fmt;

/// A named individual with an age.
///
/// No validation is done on either field; a negative age is accepted as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns `Hi, I'm {name} and I'm {age} years old`.
    pub fn introduce(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.introduce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_introduce() {
        let ada = Person::new("Ada", 36);
        assert_eq!(ada.introduce(), "Hi, I'm Ada and I'm 36 years old");
    }

    #[rstest]
    #[case("", 0, "Hi, I'm  and I'm 0 years old")]
    #[case("Grace", -1, "Hi, I'm Grace and I'm -1 years old")]
    #[case("Alan Turing", 41, "Hi, I'm Alan Turing and I'm 41 years old")]
    fn test_introduce_any_fields(#[case] name: &str, #[case] age: i64, #[case] expected: &str) {
        assert_eq!(Person::new(name, age).introduce(), expected);
    }

    #[test]
    fn test_display_matches_introduce() {
        let person = Person {
            name: "Linus".to_string(),
            age: 28,
        };
        assert_eq!(person.to_string(), person.introduce());
    }

    #[test]
    fn test_introduce_does_not_mutate() {
        let person = Person::new("Ada", 36);
        let before = person.clone();
        let _ = person.introduce();
        assert_eq!(person, before);
    }
}
