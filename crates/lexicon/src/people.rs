//! Well-known directors and actors.
//!
//! Each entry pairs a normalized match key with a display name, a role and
//! the genre the person is most associated with. Detection scans the table
//! in order and stops at the first key found in the text.

use crate::genres::Genre;

/// Whether a person is matched as a director or as an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRole {
    Director,
    Actor,
}

/// A famous person the extractor can recognize.
#[derive(Debug, Clone, Copy)]
pub struct Person {
    /// Normalized substring that triggers the match.
    pub key: &'static str,
    /// Full display name used in confirmations and catalog person search.
    pub name: &'static str,
    pub role: PersonRole,
    /// Genre the person is associated with; set alongside the person.
    pub genre: Genre,
}

const fn director(key: &'static str, name: &'static str, genre: Genre) -> Person {
    Person {
        key,
        name,
        role: PersonRole::Director,
        genre,
    }
}

const fn actor(key: &'static str, name: &'static str, genre: Genre) -> Person {
    Person {
        key,
        name,
        role: PersonRole::Actor,
        genre,
    }
}

/// Ordered person table. Keys are already normalized (lowercase, no
/// diacritics) because detection runs on normalized text.
pub static PEOPLE: &[Person] = &[
    director("tarantino", "Quentin Tarantino", Genre::Crime),
    director("spielberg", "Steven Spielberg", Genre::Adventure),
    director("nolan", "Christopher Nolan", Genre::SciFi),
    director("scorsese", "Martin Scorsese", Genre::Crime),
    director("kubrick", "Stanley Kubrick", Genre::Drama),
    director("hitchcock", "Alfred Hitchcock", Genre::Thriller),
    actor("dicaprio", "Leonardo DiCaprio", Genre::Drama),
    actor("pitt", "Brad Pitt", Genre::Drama),
    actor("hanks", "Tom Hanks", Genre::Drama),
    actor("johansson", "Scarlett Johansson", Genre::Action),
    actor("lawrence", "Jennifer Lawrence", Genre::Drama),
    actor("depp", "Johnny Depp", Genre::Fantasy),
    director("almodovar", "Pedro Almodóvar", Genre::Drama),
    actor("banderas", "Antonio Banderas", Genre::Drama),
    actor("penelope cruz", "Penélope Cruz", Genre::Drama),
    actor("bardem", "Javier Bardem", Genre::Drama),
    director("del toro", "Guillermo del Toro", Genre::Fantasy),
    director("cuaron", "Alfonso Cuarón", Genre::Drama),
    director("inarritu", "Alejandro González Iñárritu", Genre::Drama),
    actor("darin", "Ricardo Darín", Genre::Drama),
];

/// Find the first person whose key occurs as a substring of the normalized
/// text.
pub fn find_person(normalized_text: &str) -> Option<&'static Person> {
    PEOPLE.iter().find(|person| normalized_text.contains(person.key))
}
