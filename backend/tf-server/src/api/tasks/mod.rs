pub mod create_task_request;
pub mod list_tasks_query;
pub mod my_tasks_response;
pub mod project_option;
pub mod task_counts;
pub mod task_dto;
pub mod task_filters_dto;
pub mod task_form_response;
pub mod task_list_response;
pub mod task_response;
pub mod task_saved_response;
#[allow(clippy::module_inception)]
pub mod tasks;
pub mod update_task_request;
