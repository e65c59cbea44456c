use marketing_list::{list_users, Context, Error};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let context = Context {
        request_id: "local".to_string(),
        function_name: "marketing-list".to_string(),
    };
    let response = list_users(json!({}), context).await?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
