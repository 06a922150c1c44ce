// src/main.rs
use env_logger::Env;
use structopt::StructOpt;
use tooldex::{Catalog, Settings, Tool};

#[derive(StructOpt, Debug)]
#[structopt(name = "tooldex", about = "Query the tool directory's record store")]
enum Opt {
    /// List all catalogued tools
    Tools,
    /// Look up one tool by slug
    Tool { slug: String },
    /// List all blog posts
    Posts,
    /// Look up one blog post by slug
    Post { slug: String },
    /// List tools sharing a category with the given tool
    Alternatives { slug: String },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::new(settings) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to construct record client: {}", e);
            std::process::exit(1);
        }
    };

    let output = match Opt::from_args() {
        Opt::Tools => serde_json::to_string_pretty(&catalog.get_tools().await),
        Opt::Tool { slug } => serde_json::to_string_pretty(&catalog.get_tool_by_slug(&slug).await),
        Opt::Posts => serde_json::to_string_pretty(&catalog.get_blog_posts().await),
        Opt::Post { slug } => {
            serde_json::to_string_pretty(&catalog.get_blog_post_by_slug(&slug).await)
        }
        Opt::Alternatives { slug } => match catalog.get_tool_by_slug(&slug).await {
            Some(tool) => serde_json::to_string_pretty(&catalog.get_alternatives(&tool).await),
            None => serde_json::to_string_pretty(&Vec::<Tool>::new()),
        },
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode output: {}", e),
    }
}
