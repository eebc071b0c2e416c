//! # Supplier Repository
//!
//! Database operations for suppliers (grooming providers).
//!
//! Suppliers are read-only from the booking flow's perspective: rows are
//! provisioned by the seed binary or by operators, and the dashboard only
//! ever looks them up to verify credentials and display a name.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use chrono::{DateTime, Utc};
use petpro_core::Supplier;

/// A supplier row, including credentials.
///
/// The `password_hash` stays inside the database layer; handlers convert to
/// [`petpro_core::Supplier`] before anything is serialized outward.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SupplierRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl SupplierRecord {
    /// Verify a login password against the stored argon2 hash.
    pub fn verify_password(&self, password: &str) -> bool {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let parsed_hash = match PasswordHash::new(&self.password_hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// The credential-free view used by the rest of the system.
    pub fn to_supplier(&self) -> Supplier {
        Supplier {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> DbResult<String> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Looks up an active supplier by login email.
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<SupplierRecord>> {
        let record = sqlx::query_as::<_, SupplierRecord>(
            r#"
            SELECT id, email, name, password_hash, is_active, created_at
            FROM suppliers
            WHERE email = ?1 AND is_active = 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Gets a supplier by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<SupplierRecord>> {
        let record = sqlx::query_as::<_, SupplierRecord>(
            r#"
            SELECT id, email, name, password_hash, is_active, created_at
            FROM suppliers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Inserts a supplier (seed binary / provisioning only).
    pub async fn insert(&self, record: &SupplierRecord) -> DbResult<()> {
        debug!(id = %record.id, email = %record.email, "Inserting supplier");

        sqlx::query(
            r#"
            INSERT INTO suppliers (id, email, name, password_hash, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&record.id)
        .bind(&record.email)
        .bind(&record.name)
        .bind(&record.password_hash)
        .bind(record.is_active)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Total number of suppliers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use uuid::Uuid;

    fn record(email: &str, password: &str) -> SupplierRecord {
        SupplierRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: "Pawsitive Care".to_string(),
            password_hash: hash_password(password).unwrap(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_lookup_and_password_verification() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let supplier = record("groomer@petpro.test", "grooming123");
        db.suppliers().insert(&supplier).await.unwrap();

        let found = db
            .suppliers()
            .get_by_email("groomer@petpro.test")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, supplier.id);
        assert!(found.verify_password("grooming123"));
        assert!(!found.verify_password("wrong-password"));
    }

    #[tokio::test]
    async fn test_inactive_supplier_cannot_be_looked_up() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut supplier = record("retired@petpro.test", "grooming123");
        supplier.is_active = false;
        db.suppliers().insert(&supplier).await.unwrap();

        let found = db.suppliers().get_by_email("retired@petpro.test").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.suppliers()
            .insert(&record("dup@petpro.test", "one"))
            .await
            .unwrap();

        let result = db.suppliers().insert(&record("dup@petpro.test", "two")).await;
        assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
    }
}
