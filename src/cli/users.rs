// cli/users.rs — `taskd create-user/list-users/get-user/delete-user/summary`.

use anyhow::Result;

use crate::client::ApiClient;

/// `taskd create-user --name <name> --email <email> [--age <age>]`
pub async fn cmd_create(api_url: &str, name: String, email: String, age: Option<u32>) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let user = client.create_user(&name, &email, age).await?;
    println!("✓ Created user: {} [ID: {}]", user.name, user.id);
    Ok(())
}

/// `taskd list-users`
pub async fn cmd_list(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let users = client.list_users().await?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("{:<6} {:<24} {:<32} {}", "ID", "Name", "Email", "Age");
    println!("{}", "-".repeat(70));
    for user in &users {
        let age = user.age.map(|a| a.to_string()).unwrap_or_default();
        println!("{:<6} {:<24} {:<32} {}", user.id, user.name, user.email, age);
    }
    println!("\n{} users", users.len());
    Ok(())
}

/// `taskd get-user <id>`
pub async fn cmd_show(api_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let user = client.get_user(id).await?;
    println!("ID:    {}", user.id);
    println!("Name:  {}", user.name);
    println!("Email: {}", user.email);
    if let Some(age) = user.age {
        println!("Age:   {age}");
    }
    Ok(())
}

/// `taskd delete-user <id>` — the user's tasks go with them.
pub async fn cmd_delete(api_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    client.delete_user(id).await?;
    println!("✓ Deleted user: {id}");
    Ok(())
}

/// `taskd summary <user-id>` — one user's task totals and completion rate.
pub async fn cmd_summary(api_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let user = client.get_user(id).await?;
    let tasks = client.list_tasks(None, Some(id)).await?;

    let completed = tasks.iter().filter(|t| t.completed).count();
    let pending = tasks.len() - completed;
    let rate = if tasks.is_empty() {
        0.0
    } else {
        completed as f64 / tasks.len() as f64 * 100.0
    };

    println!("Task summary for {} ({})", user.name, user.email);
    println!("Total tasks:     {}", tasks.len());
    println!("Completed:       {completed}");
    println!("Pending:         {pending}");
    println!("Completion rate: {rate:.1}%");
    Ok(())
}
