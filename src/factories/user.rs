// src/factories/user.rs
//! Synthetic user records for seeding the database.
use rand::Rng;

use crate::models::user::NewUser;

pub const DEFAULT_BATCH_SIZE: usize = 10;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Whitfield",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Liskov", "Shannon", "Knuth", "Dijkstra", "Allen", "Hopper", "Lamarr",
    "Sutherland", "Backus", "Johnson", "Torvalds", "Hamilton", "Wirth", "Perlman", "Goldwasser",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// One random user; the email is always lower-cased.
pub fn create_user_data() -> NewUser {
    create_user_data_with(&mut rand::thread_rng())
}

pub fn create_user_data_with<R: Rng + ?Sized>(rng: &mut R) -> NewUser {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let suffix: u16 = rng.gen_range(1..10_000);

    NewUser {
        email: format!("{first}.{last}{suffix}@{}", pick(rng, DOMAINS)).to_lowercase(),
        username: format!("{first}_{last}{}", suffix % 100),
        is_active: rng.gen_bool(0.5),
    }
}

pub fn create_multiple_users(count: usize) -> Vec<NewUser> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| create_user_data_with(&mut rng)).collect()
}
