// cli/tasks.rs — `taskd create-task/list-tasks/complete-task/delete-task`.

use anyhow::Result;

use crate::client::ApiClient;

/// `taskd create-task --title <title> [--description <text>] [--owner-id <id>]`
pub async fn cmd_create(
    api_url: &str,
    title: String,
    description: Option<String>,
    owner_id: Option<u64>,
) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let task = client
        .create_task(&title, description.as_deref(), owner_id)
        .await?;
    println!("✓ Created task: {} [ID: {}]", task.title, task.id);
    Ok(())
}

/// `taskd list-tasks [--completed <bool>] [--owner-id <id>]`
pub async fn cmd_list(api_url: &str, completed: Option<bool>, owner_id: Option<u64>) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let tasks = client.list_tasks(completed, owner_id).await?;

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("Tasks:");
    for task in &tasks {
        let status = if task.completed { "✓" } else { "○" };
        let owner = task
            .owner_id
            .map(|o| format!(" [owner: {o}]"))
            .unwrap_or_default();
        println!("  {status} {} [ID: {}]{owner}", task.title, task.id);
        if let Some(description) = &task.description {
            println!("      {description}");
        }
    }
    println!("\n{} tasks", tasks.len());
    Ok(())
}

/// `taskd complete-task <id>`
pub async fn cmd_complete(api_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let task = client.complete_task(id).await?;
    println!("✓ Completed task: {}", task.title);
    Ok(())
}

/// `taskd delete-task <id>`
pub async fn cmd_delete(api_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    client.delete_task(id).await?;
    println!("✓ Deleted task: {id}");
    Ok(())
}
