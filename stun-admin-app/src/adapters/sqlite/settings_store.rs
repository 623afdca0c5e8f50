//! `SettingsStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait};

use stun_admin_core::error::{CoreError, CoreResult};
use stun_admin_core::traits::SettingsStore;
use stun_admin_core::types::SettingKey;

use super::entity::app_config;
use super::SqliteStore;

#[async_trait]
impl SettingsStore for SqliteStore {
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>> {
        let row = app_config::Entity::find_by_id((key.namespace.clone(), key.name.clone()))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query setting {key}: {e}")))?;

        Ok(row.map(|model| model.value))
    }

    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()> {
        let active_model = app_config::ActiveModel {
            namespace: Set(key.namespace.clone()),
            name: Set(key.name.clone()),
            value: Set(value.to_string()),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        app_config::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    app_config::Column::Namespace,
                    app_config::Column::Name,
                ])
                .update_columns([app_config::Column::Value, app_config::Column::UpdatedAt])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save setting {key}: {e}")))?;

        Ok(())
    }

    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()> {
        app_config::Entity::delete_by_id((key.namespace.clone(), key.name.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete setting {key}: {e}")))?;
        Ok(())
    }
}
