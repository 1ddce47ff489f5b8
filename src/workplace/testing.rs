//! Fixtures for unit tests

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::workplace::company::Company;
use crate::workplace::params::CompanyParams;
use crate::workplace::people::{Employee, Person, Trait, BASE_HOURLY_WAGE};
use crate::workplace::types::EmployeeId;

const NAMES: [(&str, Trait); 8] = [
    ("Amos", Trait::Masculine),
    ("Bessie", Trait::Feminine),
    ("Clyde", Trait::Masculine),
    ("Daisy", Trait::Feminine),
    ("Doc", Trait::VisiblyQueer),
    ("Ezra", Trait::Masculine),
    ("Hattie", Trait::Feminine),
    ("Otis", Trait::Masculine),
];

/// A company of `n` distinctly named, content employees on the base wage, all on today's shift
pub fn staff(n: usize) -> (Company, Vec<EmployeeId>) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut company = Company::new(CompanyParams::default());
    let mut ids = Vec::new();
    for i in 0..n {
        let (first, t) = NAMES[i % NAMES.len()];
        let mut e = company.new_employee(&mut rng);
        e.person = Person::new(first, &format!("Worker{}", i), 30, BTreeSet::from([t]));
        e.disposition = 0.7;
        e.hourly_wage = BASE_HOURLY_WAGE;
        let id = company.hire_with(e, 0, 5, &mut rng).expect("distinct names");
        ids.push(id);
    }
    company.scheduled_today.extend(ids.iter().copied());
    (company, ids)
}

/// The player, talking to employees
pub fn outsider() -> Employee {
    Employee::outsider("Boss", "Hogg")
}
