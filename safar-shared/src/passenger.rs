use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

/// A traveller on a booking. Forms start from a blank entry, so a default
/// passenger is deliberately invalid until filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Passenger {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

impl Passenger {
    pub fn new(name: impl Into<String>, age: i32, gender: Gender) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
        }
    }

    /// A passenger is bookable once the name has substance and the age is
    /// a positive number.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.age > 0
    }
}
