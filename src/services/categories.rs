use crate::dto::categories::CategoryDto;
use crate::forms::categories::{
    AddCategoryForm, AddCategoryFormPayload, DeleteCategoryFormPayload,
};
use crate::models::config::SeedCategory;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_name(&payload.name) {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Err(ServiceError::Form(format!(
                "Category \"{}\" already exists",
                payload.name
            )));
        }
        Err(e) => {
            log::error!("Failed to look up category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(_) => {
            log::info!("Created category {} ({})", category.name, category.kind);
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Ok(false)
        }
    }
}

/// Deletes a category; entries booked against it are deleted with it.
pub fn delete_category<R>(payload: DeleteCategoryFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(payload.category_id) {
        Ok(_) => {
            log::info!("Deleted category {}", payload.category_id);
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Ok(false)
        }
    }
}

/// Creates the configured categories that do not exist yet.
///
/// Returns how many categories were created. Invalid definitions are skipped.
pub fn seed_categories<R>(seeds: Vec<SeedCategory>, repo: &R) -> ServiceResult<usize>
where
    R: CategoryReader + CategoryWriter,
{
    let mut created = 0;
    for seed in seeds {
        let payload: AddCategoryFormPayload = match AddCategoryForm::from(seed).try_into() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Skipping seed category: {e}");
                continue;
            }
        };

        match add_category(payload, repo) {
            Ok(true) => created += 1,
            Ok(false) | Err(ServiceError::Form(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(created)
}
