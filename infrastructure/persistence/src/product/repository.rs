use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        RepositoryError::Duplicated
    } else {
        RepositoryError::Transfer
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        // No ORDER BY: listing order is store-defined.
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, color, size, image_url, gst, discount, hsn_code, remarks, barcode FROM products",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::Transfer)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, color, size, image_url, gst, discount, hsn_code, remarks, barcode FROM products WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::Transfer)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, color, size, image_url, gst, discount, hsn_code, remarks, barcode)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(&product.color)
        .bind(&product.size)
        .bind(product.image_url.as_str())
        .bind(&product.gst)
        .bind(&product.discount)
        .bind(&product.hsn_code)
        .bind(&product.remarks)
        .bind(&product.barcode)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        // Single statement: the record reflects either the full new field
        // set or the prior state, never a partial merge.
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                color = $3,
                size = $4,
                image_url = $5,
                gst = $6,
                discount = $7,
                hsn_code = $8,
                remarks = $9,
                barcode = $10
            WHERE id = $1"#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(&product.color)
        .bind(&product.size)
        .bind(product.image_url.as_str())
        .bind(&product.gst)
        .bind(&product.discount)
        .bind(&product.hsn_code)
        .bind(&product.remarks)
        .bind(&product.barcode)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::Transfer)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::Transfer)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
