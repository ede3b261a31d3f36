//! Search-predicate builder for the film catalog.
//!
//! Converts a sparse [`Suchkriterien`] into a composed `WHERE` clause
//! with ordered `$n` placeholders over `filme f` inner-joined with
//! `skripte s`. Construction is read-only; nothing executes until the
//! repository binds the values and fetches.
//!
//! Predicate order is fixed: titel first, then the action, thriller, and
//! comedy tag filters, then the equality fields in declared order. The
//! first predicate starts the group, every later one is ANDed.

use kino_core::suchkriterien::Suchkriterien;

/// A value to bind to a dynamically built query, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
    Text(String),
    Int(i32),
}

/// A composed, not-yet-executed search predicate.
#[derive(Debug, Default)]
pub struct FilmSuche {
    conditions: Vec<String>,
    binds: Vec<Bind>,
}

impl FilmSuche {
    /// Build the predicate for the given criteria.
    pub fn from_kriterien(kriterien: &Suchkriterien) -> Self {
        let mut suche = Self::default();

        // Substring, case-insensitive, against the joined skript title.
        if let Some(titel) = &kriterien.titel {
            suche.push_text("s.titel ILIKE", format!("%{titel}%"));
        }

        // Tag filters: substring containment of the literal uppercase
        // keyword, independent of each other.
        if kriterien.action {
            suche.push_tag("ACTION");
        }
        if kriterien.thriller {
            suche.push_tag("THRILLER");
        }
        if kriterien.comedy {
            suche.push_tag("COMEDY");
        }

        // Remaining fields compare on equality.
        if let Some(imdb) = &kriterien.imdb {
            suche.push_text("f.imdb =", imdb.clone());
        }
        if let Some(rating) = kriterien.rating {
            suche.push_int("f.rating =", rating);
        }
        if let Some(jahr) = kriterien.erscheinungsjahr {
            suche.push_int("f.erscheinungsjahr =", jahr);
        }

        suche
    }

    /// The composed clause: empty for no predicates, otherwise
    /// `WHERE <p1> AND <p2> ...`.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Bind values in `$n` order.
    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }

    fn push_text(&mut self, comparison: &str, value: String) {
        self.binds.push(Bind::Text(value));
        self.conditions
            .push(format!("{comparison} ${}", self.binds.len()));
    }

    fn push_int(&mut self, comparison: &str, value: i32) {
        self.binds.push(Bind::Int(value));
        self.conditions
            .push(format!("{comparison} ${}", self.binds.len()));
    }

    fn push_tag(&mut self, schlagwort: &str) {
        // The keyword set is fixed at compile time, so the literal goes
        // straight into the clause without a placeholder.
        self.conditions.push(format!(
            "array_to_string(f.schlagwoerter, ',') LIKE '%{schlagwort}%'"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_have_no_where_clause() {
        let suche = FilmSuche::from_kriterien(&Suchkriterien::default());
        assert_eq!(suche.where_clause(), "");
        assert!(suche.binds().is_empty());
    }

    #[test]
    fn test_titel_is_case_insensitive_substring() {
        let kriterien = Suchkriterien {
            titel: Some("kira".to_string()),
            ..Default::default()
        };
        let suche = FilmSuche::from_kriterien(&kriterien);
        assert_eq!(suche.where_clause(), "WHERE s.titel ILIKE $1");
        assert_eq!(suche.binds(), &[Bind::Text("%kira%".to_string())]);
    }

    #[test]
    fn test_tag_filters_are_independent() {
        let kriterien = Suchkriterien {
            action: true,
            comedy: true,
            ..Default::default()
        };
        let suche = FilmSuche::from_kriterien(&kriterien);
        assert_eq!(
            suche.where_clause(),
            "WHERE array_to_string(f.schlagwoerter, ',') LIKE '%ACTION%' \
             AND array_to_string(f.schlagwoerter, ',') LIKE '%COMEDY%'"
        );
        assert!(suche.binds().is_empty());
    }

    #[test]
    fn test_predicate_order_and_bind_numbering() {
        let kriterien = Suchkriterien {
            titel: Some("a".to_string()),
            thriller: true,
            imdb: Some("1234-5678".to_string()),
            rating: Some(5),
            erscheinungsjahr: Some(1999),
            ..Default::default()
        };
        let suche = FilmSuche::from_kriterien(&kriterien);
        assert_eq!(
            suche.where_clause(),
            "WHERE s.titel ILIKE $1 \
             AND array_to_string(f.schlagwoerter, ',') LIKE '%THRILLER%' \
             AND f.imdb = $2 AND f.rating = $3 AND f.erscheinungsjahr = $4"
        );
        assert_eq!(
            suche.binds(),
            &[
                Bind::Text("%a%".to_string()),
                Bind::Text("1234-5678".to_string()),
                Bind::Int(5),
                Bind::Int(1999),
            ]
        );
    }

    #[test]
    fn test_single_equality_field() {
        let kriterien = Suchkriterien {
            rating: Some(3),
            ..Default::default()
        };
        let suche = FilmSuche::from_kriterien(&kriterien);
        assert_eq!(suche.where_clause(), "WHERE f.rating = $1");
        assert_eq!(suche.binds(), &[Bind::Int(3)]);
    }
}
