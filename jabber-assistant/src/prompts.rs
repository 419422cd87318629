//! # Slot Extraction Prompts
//!
//! One prompt builder per parameterized intent. Each embeds the raw
//! utterance and an example of the JSON shape the extractor expects back.
//! The model only ever fills values; the pipeline owns every key name.

/// Prompt for creating a task: the model also writes a clean summary and
/// description from the request.
pub fn create_task(utterance: &str) -> String {
  format!(
    "You are a Jira assistant. Your task is to create a Jira issue based on the user's request.\n\
     The user has provided the following input:\n\n\
     User request: {utterance}\n\n\
     Based on this input, generate the following details for the Jira issue:\n\
     1. A concise and clear summary (maximum 10 words).\n\
     2. A detailed description of the task (1-2 sentences).\n\n\
     Return the details in the following JSON format:\n\
     {{\n\
    \x20    \"project_key\": \"PROJ\",\n\
    \x20    \"summary\": \"A concise summary of the task\",\n\
    \x20    \"description\": \"A detailed description of the task\"\n\
     }}\n\n\
     Now, generate the JSON for the user's request. Return only the JSON."
  )
}

/// Prompt for updating an issue's summary and/or description
pub fn update_issue(utterance: &str) -> String {
  format!(
    "Extract the following details from the user request and return them as valid JSON:\n\
     {{\n\
    \x20    \"summary\": \"Update search functionality\",\n\
    \x20    \"description\": \"Enhance the search feature for better performance\"\n\
     }}\n\n\
     Leave out any field the user did not mention. Return only the JSON.\n\n\
     User request: {utterance}"
  )
}

/// Prompt for turning a search request into a JQL query
pub fn search_issues(utterance: &str) -> String {
  format!(
    "Extract the following details from the user request and return them as valid JSON:\n\
     {{\n\
    \x20    \"jql_query\": \"project = PROJ AND status = 'In Progress'\"\n\
     }}\n\n\
     Return only the JSON.\n\n\
     User request: {utterance}"
  )
}

/// Prompt for assigning an issue: the issue is described in free text and
/// the assignee by display name; both are resolved against Jira afterwards.
pub fn assign_issue(utterance: &str) -> String {
  format!(
    "Extract the following details from the user request and return them as valid JSON:\n\
     {{\n\
    \x20    \"issue_description\": \"the login page crash\",\n\
    \x20    \"assignee_name\": \"John Doe\"\n\
     }}\n\n\
     Return only the JSON.\n\n\
     User request: {utterance}"
  )
}

/// Prompt for transitioning an issue by workflow step name
pub fn transition_issue(utterance: &str) -> String {
  format!(
    "Extract the following details from the user request and return them as valid JSON:\n\
     {{\n\
    \x20    \"issue_key\": \"PROJ-123\",\n\
    \x20    \"transition_name\": \"In Progress\"\n\
     }}\n\n\
     Return only the JSON.\n\n\
     User request: {utterance}"
  )
}

/// Prompt for attaching a local file to an issue
pub fn add_attachment(utterance: &str) -> String {
  format!(
    "Extract the following details from the user request and return them as valid JSON:\n\
     {{\n\
    \x20    \"issue_key\": \"PROJ-123\",\n\
    \x20    \"file_path\": \"/path/to/file.txt\"\n\
     }}\n\n\
     Return only the JSON.\n\n\
     User request: {utterance}"
  )
}
