//! User-facing messages, in the service's locale (Hungarian).

use crate::types::{Entity, Parent};

pub const VALIDATION_ERROR: &str = "Validation Error";
pub const BAD_REQUEST: &str = "Bad Request";
pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

pub const INVALID_REFERENCE: &str = "Érvénytelen diák vagy tantárgy azonosító.";

/// Message for a missing row of the given resource.
pub fn not_found(entity: Entity) -> &'static str {
    match entity {
        Entity::Student => "A diák nem található.",
        Entity::Course => "A tantárgy nem található.",
        Entity::Enrollment => "A beiratkozás nem található.",
    }
}

/// Message for a delete rejected because enrollments still reference the row.
pub fn still_referenced(parent: Parent) -> &'static str {
    match parent {
        Parent::Student => "Ehhez a diákhoz tartoznak beiratkozások ezért nem lehet kitörölni.",
        Parent::Course => "Ehhez a tantárgyhoz tartoznak beiratkozások ezért nem lehet kitörölni.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_are_distinct_per_resource() {
        let messages = [
            not_found(Entity::Student),
            not_found(Entity::Course),
            not_found(Entity::Enrollment),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn referenced_messages_name_the_resource() {
        assert!(still_referenced(Parent::Student).contains("diák"));
        assert!(still_referenced(Parent::Course).contains("tantárgy"));
    }
}
