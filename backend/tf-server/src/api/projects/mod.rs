pub mod create_project_request;
pub mod list_projects_query;
pub mod member_action_request;
pub mod member_dto;
pub mod members_response;
pub mod project_detail_query;
pub mod project_detail_response;
pub mod project_dto;
pub mod project_form_response;
pub mod project_list_response;
pub mod project_response;
pub mod project_saved_response;
pub mod project_summary_dto;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod update_project_request;
