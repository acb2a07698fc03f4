use rand::Rng;

use crate::models::{Gender, Person};

pub const NAMES: [&str; 4] = ["Mary", "Antony", "Jhon", "Bill"];
pub const GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];
pub const PHONE: &str = "(55) 4458-9965";
pub const EMAIL_DOMAIN: &str = "example.com";

pub fn generate_name() -> String {
    generate_name_with(&mut rand::rng())
}

/// Two tokens drawn independently, with replacement, from [`NAMES`].
pub fn generate_name_with<R: Rng>(rng: &mut R) -> String {
    let first = NAMES[rng.random_range(0..NAMES.len())];
    let last = NAMES[rng.random_range(0..NAMES.len())];

    format!("{} {}", first, last)
}

pub fn generate_phone() -> String {
    PHONE.to_string()
}

/// Derives an address from a name: lower-cased tokens joined by dots.
pub fn email_for(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");

    if local.is_empty() {
        format!("user@{}", EMAIL_DOMAIN)
    } else {
        format!("{}@{}", local, EMAIL_DOMAIN)
    }
}

pub fn generate_email() -> String {
    generate_email_with(&mut rand::rng())
}

pub fn generate_email_with<R: Rng>(rng: &mut R) -> String {
    email_for(&generate_name_with(rng))
}

pub fn generate_gender() -> Gender {
    generate_gender_with(&mut rand::rng())
}

pub fn generate_gender_with<R: Rng>(rng: &mut R) -> Gender {
    GENDERS[rng.random_range(0..GENDERS.len())]
}

pub fn generate_person(code: u64) -> Person {
    generate_person_with(&mut rand::rng(), code)
}

pub fn generate_person_with<R: Rng>(rng: &mut R, code: u64) -> Person {
    let name = generate_name_with(rng);
    let email = email_for(&name);
    let gender = generate_gender_with(rng);

    Person::new(code, &name, PHONE, &email, gender)
}
