//! People: identity, demographic traits and name generation

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkplaceError};
use super::names::{pick, NameBank};

/// Age above which a person counts as old
pub const OLD_AGE: u32 = 55;
/// Age below which a person counts as young
pub const YOUNG_AGE: u32 = 25;

/// Mean of the age distribution
const AGE_MEAN: f64 = 35.0;
/// Rejection sampling gives up and clamps after this many draws
const MAX_AGE_DRAWS: usize = 1000;

/// Demographic tags attached to a person
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    Masculine,
    Feminine,
    VisiblyQueer,
    Gay,
    Old,
    Young,
}

impl Trait {
    pub fn label(&self) -> &'static str {
        match self {
            Trait::Masculine => "masculine",
            Trait::Feminine => "feminine",
            Trait::VisiblyQueer => "visibly queer",
            Trait::Gay => "gay",
            Trait::Old => "old",
            Trait::Young => "young",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A generated person
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub middle_initial: Option<char>,
    pub nickname: Option<String>,
    pub age: u32,
    pub traits: BTreeSet<Trait>,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, age: u32, traits: BTreeSet<Trait>) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_initial: None,
            nickname: None,
            age,
            traits,
        }
    }

    /// Generate a person with the default name tables
    pub fn generate<R: Rng>(min_age: u32, max_age: u32, rng: &mut R) -> Self {
        PersonGenerator::default().generate(min_age, max_age, rng)
    }

    /// Identity is first name, middle initial and last name; nicknames don't count
    pub fn same_identity(&self, other: &Person) -> bool {
        self.first_name == other.first_name
            && self.middle_initial == other.middle_initial
            && self.last_name == other.last_name
    }

    /// Full name, e.g. `Ada 'Sarge' Q. Cole`
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        if let Some(nick) = &self.nickname {
            name.push_str(&format!(" '{}'", nick));
        }
        if let Some(initial) = self.middle_initial {
            name.push_str(&format!(" {}.", initial));
        }
        name.push(' ');
        name.push_str(&self.last_name);
        name
    }

    pub fn has(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }

    pub fn is_masculine(&self) -> bool {
        self.has(Trait::Masculine)
    }

    pub fn is_feminine(&self) -> bool {
        self.has(Trait::Feminine)
    }

    pub fn sex_descriptor(&self) -> &'static str {
        if self.is_feminine() {
            "F"
        } else if self.is_masculine() {
            "M"
        } else {
            "?"
        }
    }

    pub fn they(&self) -> &'static str {
        if self.is_masculine() {
            "he"
        } else if self.is_feminine() {
            "she"
        } else {
            "they"
        }
    }

    pub fn them(&self) -> &'static str {
        if self.is_masculine() {
            "him"
        } else if self.is_feminine() {
            "her"
        } else {
            "them"
        }
    }

    pub fn their(&self) -> &'static str {
        if self.is_masculine() {
            "his"
        } else if self.is_feminine() {
            "her"
        } else {
            "their"
        }
    }

    pub fn theyre(&self) -> &'static str {
        if self.is_masculine() {
            "he's"
        } else if self.is_feminine() {
            "she's"
        } else {
            "they're"
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nickname {
            Some(nick) => f.write_str(nick),
            None => f.write_str(&self.first_name),
        }
    }
}

/// Uppercase the first letter of a word
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Procedural person generator
#[derive(Clone, Debug)]
pub struct PersonGenerator {
    names: NameBank,
    middle_initial_chance: f64,
}

impl Default for PersonGenerator {
    fn default() -> Self {
        PersonGenerator::new(0.25)
    }
}

impl PersonGenerator {
    pub fn new(middle_initial_chance: f64) -> Self {
        PersonGenerator {
            names: NameBank::default(),
            middle_initial_chance: middle_initial_chance.clamp(0.0, 1.0),
        }
    }

    pub fn names(&self) -> &NameBank {
        &self.names
    }

    /// Generate a person aged within `[min_age, max_age]`
    pub fn generate<R: Rng>(&self, min_age: u32, max_age: u32, rng: &mut R) -> Person {
        let (min_age, max_age) = if min_age <= max_age {
            (min_age, max_age)
        } else {
            (max_age, min_age)
        };

        let mut traits = BTreeSet::new();

        let g: f64 = rng.gen_range(-1.0..=1.0);
        if -0.1 < g && g < 0.1 {
            traits.insert(Trait::VisiblyQueer);
        } else if g < 0.0 {
            traits.insert(Trait::Masculine);
        } else {
            traits.insert(Trait::Feminine);
        }

        if rng.gen::<f64>() > 0.9 {
            traits.insert(Trait::VisiblyQueer);
        }

        let presents_binary = traits.contains(&Trait::Masculine) || traits.contains(&Trait::Feminine);
        if presents_binary && traits.contains(&Trait::VisiblyQueer) {
            traits.insert(Trait::Gay);
        }

        let age = sample_age(min_age, max_age, rng);
        if age > OLD_AGE {
            traits.insert(Trait::Old);
        }
        if age < YOUNG_AGE {
            traits.insert(Trait::Young);
        }

        let first = self.names.first_name(
            traits.contains(&Trait::Feminine),
            traits.contains(&Trait::Masculine),
            rng,
        );
        let last = self.names.surname(rng);

        let mut person = Person::new(first, last, age, traits);
        if rng.gen_bool(self.middle_initial_chance) {
            person.middle_initial = Some(self.names.middle_initial(rng));
        }
        person
    }

    /// Give every person lacking a nickname one that isn't in `used_nicknames`.
    ///
    /// Name-derived nicknames are preferred, then the generic pool. Chosen
    /// nicknames are added to `used_nicknames`. Returns how many were assigned.
    pub fn give_distinguishing_nicknames<R: Rng>(
        &self,
        people: &mut [Person],
        used_nicknames: &mut HashSet<String>,
        rng: &mut R,
    ) -> Result<usize> {
        used_nicknames.extend(people.iter().filter_map(|p| p.nickname.clone()));

        let mut assigned = 0;
        for person in people.iter_mut() {
            if person.nickname.is_some() {
                continue;
            }

            let name_based: Vec<&str> = self
                .names
                .name_based_nicknames(&person.first_name)
                .iter()
                .copied()
                .filter(|n| !used_nicknames.contains(*n))
                .collect();

            let nickname = if !name_based.is_empty() {
                pick(rng, &name_based)
            } else {
                let free: Vec<&str> = self
                    .names
                    .nicknames()
                    .iter()
                    .copied()
                    .filter(|n| !used_nicknames.contains(*n))
                    .collect();
                if free.is_empty() {
                    return Err(WorkplaceError::NicknamesExhausted {
                        pool: self.names.nicknames().len(),
                    });
                }
                pick(rng, &free)
            };

            person.nickname = Some(nickname.to_string());
            used_nicknames.insert(nickname.to_string());
            assigned += 1;
        }

        Ok(assigned)
    }
}

/// Rejection-sampled gaussian age, clamped if sampling keeps missing the range
fn sample_age<R: Rng>(min_age: u32, max_age: u32, rng: &mut R) -> u32 {
    let sigma = (max_age - min_age) as f64 / 3.0;
    for _ in 0..MAX_AGE_DRAWS {
        let age = (AGE_MEAN + sigma * standard_normal(rng)).round();
        if age >= min_age as f64 && age <= max_age as f64 {
            return age as u32;
        }
    }
    (AGE_MEAN.round() as u32).clamp(min_age, max_age)
}

/// Sample from the standard normal distribution using the Box-Muller transform.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - [0, 1) keeps ln away from zero
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn person(first: &str, last: &str) -> Person {
        Person::new(first, last, 30, BTreeSet::from([Trait::Masculine]))
    }

    #[test]
    fn test_full_name_formats() {
        let mut p = person("Jack", "Cole");
        assert_eq!(p.full_name(), "Jack Cole");
        p.middle_initial = Some('Q');
        assert_eq!(p.full_name(), "Jack Q. Cole");
        p.nickname = Some("Sarge".to_string());
        assert_eq!(p.full_name(), "Jack 'Sarge' Q. Cole");
        p.middle_initial = None;
        assert_eq!(p.full_name(), "Jack 'Sarge' Cole");
        assert_eq!(p.to_string(), "Sarge");
    }

    #[test]
    fn test_identity_ignores_nickname() {
        let a = person("Jack", "Cole");
        let mut b = person("Jack", "Cole");
        b.nickname = Some("Pops".to_string());
        assert!(a.same_identity(&b));
        b.middle_initial = Some('R');
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn test_pronouns() {
        let he = person("Jack", "Cole");
        assert_eq!((he.they(), he.them(), he.their(), he.theyre()), ("he", "him", "his", "he's"));
        let they = Person::new("Doc", "Hill", 40, BTreeSet::from([Trait::VisiblyQueer]));
        assert_eq!(they.they(), "they");
        assert_eq!(they.sex_descriptor(), "?");
        assert_eq!(capitalize(they.theyre()), "They're");
    }

    #[test]
    fn test_generated_traits_and_age() {
        let generator = PersonGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let p = generator.generate(16, 80, &mut rng);
            assert!(!(p.is_masculine() && p.is_feminine()));
            assert!((16..=80).contains(&p.age));
            assert_eq!(p.has(Trait::Old), p.age > OLD_AGE);
            assert_eq!(p.has(Trait::Young), p.age < YOUNG_AGE);
            if p.has(Trait::Gay) {
                assert!(p.has(Trait::VisiblyQueer));
            }
        }
    }

    #[test]
    fn test_narrow_age_range_far_from_mean() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Person::generate(70, 70, &mut rng);
        assert_eq!(p.age, 70);
        let p = Person::generate(60, 20, &mut rng);
        assert!((20..=60).contains(&p.age));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = PersonGenerator::default();
        let a = generator.generate(16, 80, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generator.generate(16, 80, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a.full_name(), b.full_name());
        assert_eq!(a.age, b.age);
        assert_eq!(a.traits, b.traits);
    }

    #[test]
    fn test_nicknames_prefer_name_based() {
        let generator = PersonGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut people = vec![person("William", "Smith"), person("William", "Smith")];
        let mut used = HashSet::new();
        let assigned = generator
            .give_distinguishing_nicknames(&mut people, &mut used, &mut rng)
            .unwrap();
        assert_eq!(assigned, 2);
        let a = people[0].nickname.clone().unwrap();
        let b = people[1].nickname.clone().unwrap();
        assert_ne!(a, b);
        assert!(["Bill", "Billy", "Will", "Willy"].contains(&a.as_str()));
        assert!(used.contains(&a) && used.contains(&b));
    }

    #[test]
    fn test_existing_nicknames_are_kept() {
        let generator = PersonGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut first = person("Jack", "Hill");
        first.nickname = Some("Sarge".to_string());
        let mut people = vec![first, person("Jack", "Hill")];
        let mut used = HashSet::new();
        generator
            .give_distinguishing_nicknames(&mut people, &mut used, &mut rng)
            .unwrap();
        assert_eq!(people[0].nickname.as_deref(), Some("Sarge"));
        assert_ne!(people[1].nickname.as_deref(), Some("Sarge"));
    }

    #[test]
    fn test_nickname_exhaustion_is_reported() {
        let generator = PersonGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut used: HashSet<String> = generator
            .names()
            .nicknames()
            .iter()
            .map(|n| n.to_string())
            .collect();
        let mut people = vec![person("Jack", "Hill")];
        let result = generator.give_distinguishing_nicknames(&mut people, &mut used, &mut rng);
        assert!(matches!(result, Err(WorkplaceError::NicknamesExhausted { .. })));
        assert!(people[0].nickname.is_none());
    }
}
