use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub max_participants: u32,
    // Signup order, as returned by the server.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus signups, floored at zero. The server owns the cap.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left())
    }

    /// Drops the first matching email. Returns false if it was not listed.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// The `GET /activities` body: activity name -> details, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Local patch after a confirmed delete. Only `activity` is touched.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == activity)
            .map(|(_, a)| a.remove_participant(email))
            .unwrap_or(false)
    }

    fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = Catalog {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// 2xx body of `POST /activities/{name}/signup`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignupReceipt {
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_never_negative() {
        assert_eq!(activity(2, &["a@x.com"]).spots_left(), 1);
        assert_eq!(activity(1, &["a@x.com", "b@x.com"]).spots_left(), 0);
        assert_eq!(activity(0, &[]).availability_label(), "0 spots left");
    }

    #[test]
    fn catalog_keeps_server_order() {
        let body = r#"{
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": []},
            "Art Studio": {"description": "a", "schedule": "Wed", "max_participants": 18, "participants": ["x@y.z"]},
            "Band": {"description": "b", "schedule": "Mon", "max_participants": 5, "participants": []}
        }"#;
        let catalog: Catalog = serde_json::from_str(body).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, ["Chess Club", "Art Studio", "Band"]);
        assert_eq!(catalog.get("Art Studio").unwrap().participants, ["x@y.z"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let catalog: Catalog = serde_json::from_str(r#"{"Drama Club": {}}"#).unwrap();
        let drama = catalog.get("Drama Club").unwrap();
        assert_eq!(drama, &Activity::default());
        assert_eq!(drama.spots_left(), 0);
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(serde_json::from_str::<Catalog>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Catalog>(r#"{"x": {"max_participants": -1}}"#).is_err());
    }

    #[test]
    fn remove_only_touches_target_activity() {
        let mut catalog: Catalog = vec![
            ("Chess Club".to_string(), activity(2, &["a@x.com"])),
            ("Gym Class".to_string(), activity(30, &["a@x.com", "b@x.com"])),
        ]
        .into_iter()
        .collect();

        assert!(catalog.remove_participant("Chess Club", "a@x.com"));
        assert!(catalog.get("Chess Club").unwrap().participants.is_empty());
        assert_eq!(
            catalog.get("Gym Class").unwrap().participants,
            ["a@x.com", "b@x.com"]
        );
    }

    #[test]
    fn remove_drops_first_match_only() {
        let mut a = activity(5, &["a@x.com", "b@x.com", "a@x.com"]);
        assert!(a.remove_participant("a@x.com"));
        assert_eq!(a.participants, ["b@x.com", "a@x.com"]);
        assert!(!a.remove_participant("zzz@x.com"));
    }

    #[test]
    fn remove_from_unknown_activity_is_noop() {
        let mut catalog = Catalog::default();
        assert!(!catalog.remove_participant("Nope", "a@x.com"));
        assert!(catalog.is_empty());
    }
}
