// src/seed.rs
use tracing::{info, warn};

use crate::models::user::{NewUser, User};
use crate::repository::{RepositoryError, RepositoryResult, UserRepository};

pub const SEED_USER_COUNT: usize = 25;
pub const SAMPLE_SIZE: i64 = 5;

#[derive(Debug)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
    pub sample: Vec<User>,
}

/// Inserts users one at a time. A taken email is skipped; any other
/// failure stops the run.
pub async fn insert_users(
    repository: &dyn UserRepository,
    users: Vec<NewUser>,
) -> RepositoryResult<SeedReport> {
    let mut created = 0;
    let mut skipped = 0;

    for user in users {
        let email = user.email.clone();
        match repository.create(user).await {
            Ok(_) => created += 1,
            Err(RepositoryError::DuplicateKey) => {
                warn!(%email, "Skipped duplicate email");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(created, skipped, "Seed finished");

    let sample = repository.find_page(0, SAMPLE_SIZE).await?;
    Ok(SeedReport {
        created,
        skipped,
        sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;

    fn user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            username: "seeded".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_duplicates_are_skipped() {
        let repo = InMemoryUserRepository::new();
        let batch = vec![
            user("a@example.com"),
            user("b@example.com"),
            user("a@example.com"),
        ];

        let report = insert_users(&repo, batch).await.unwrap();
        assert_eq!(report.created, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sample_is_capped() {
        let repo = InMemoryUserRepository::new();
        let batch = (0..8).map(|i| user(&format!("u{i}@example.com"))).collect();

        let report = insert_users(&repo, batch).await.unwrap();
        assert_eq!(report.created, 8);
        assert_eq!(report.sample.len(), SAMPLE_SIZE as usize);
        assert_eq!(report.sample[0].id, 1);
    }
}
