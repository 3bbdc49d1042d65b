use std::fmt;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The three CRUD-managed resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Student,
    Course,
    Enrollment,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Student => "Student",
            Entity::Course => "Course",
            Entity::Enrollment => "Enrollment",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource that enrollments point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Student,
    Course,
}

impl From<Parent> for Entity {
    fn from(parent: Parent) -> Self {
        match parent {
            Parent::Student => Entity::Student,
            Parent::Course => Entity::Course,
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Entity::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_displays_like_its_entity() {
        assert_eq!(Parent::Student.to_string(), "Student");
        assert_eq!(Entity::from(Parent::Course), Entity::Course);
    }
}
