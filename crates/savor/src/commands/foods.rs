//! Menu command handlers.

use tabled::Tabled;

use savor_core::{
    Command as CoreCommand, Console, CreateFoodRequest, EntityId, Food, UpdateFoodRequest,
};

use crate::cli::{FoodsArgs, FoodsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Available")]
    available: String,
}

impl From<&Food> for FoodRow {
    fn from(f: &Food) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            category: util::dash(f.category.as_deref()),
            price: util::amount(f.price),
            available: if f.available { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(f: &Food) -> String {
    [
        format!("ID:          {}", f.id),
        format!("Name:        {}", f.name),
        format!("Description: {}", util::dash(f.description.as_deref())),
        format!("Category:    {}", util::dash(f.category.as_deref())),
        format!("Price:       {}", util::amount(f.price)),
        format!("Image:       {}", util::dash(f.image_url.as_deref())),
        format!("Available:   {}", f.available),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: FoodsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FoodsCommand::List { category } => {
            let foods: Vec<Food> = console
                .foods()
                .await?
                .into_iter()
                .filter(|f| {
                    category
                        .as_deref()
                        .is_none_or(|c| f.category.as_deref() == Some(c))
                })
                .collect();

            let out = output::render_list(
                &global.output,
                &foods,
                |f| FoodRow::from(f),
                |f| f.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FoodsCommand::Get { id } => {
            let foods = console.foods().await?;
            let found = foods.iter().find(|f| f.id.as_str() == id);
            match found {
                Some(f) => {
                    let out =
                        output::render_single(&global.output, f, detail, |f| f.id.to_string());
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                None => Err(CliError::NotFound {
                    resource_type: "food".into(),
                    identifier: id,
                    list_command: "foods list".into(),
                }),
            }
        }

        FoodsCommand::Create {
            name,
            price,
            description,
            category,
            image_url,
            unavailable,
        } => {
            let req = CreateFoodRequest {
                name: name.clone(),
                description,
                category,
                price,
                image_url,
                available: !unavailable,
            };
            console.execute(CoreCommand::CreateFood(req)).await?;
            if !global.quiet {
                eprintln!("Menu item '{name}' created");
            }
            Ok(())
        }

        FoodsCommand::Update {
            id,
            name,
            price,
            description,
            category,
            image_url,
        } => {
            let update = UpdateFoodRequest {
                name,
                description,
                category,
                price,
                image_url,
                available: None,
            };
            console
                .execute(CoreCommand::UpdateFood {
                    id: EntityId::from(id),
                    update,
                })
                .await?;
            if !global.quiet {
                eprintln!("Menu item updated");
            }
            Ok(())
        }

        FoodsCommand::Enable { id } => set_availability(console, global, id, true).await,
        FoodsCommand::Disable { id } => set_availability(console, global, id, false).await,

        FoodsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete menu item {id}?"), global.yes)? {
                return Ok(());
            }
            console
                .execute(CoreCommand::DeleteFood {
                    id: EntityId::from(id),
                })
                .await?;
            if !global.quiet {
                eprintln!("Menu item deleted");
            }
            Ok(())
        }
    }
}

async fn set_availability(
    console: &Console,
    global: &GlobalOpts,
    id: String,
    available: bool,
) -> Result<(), CliError> {
    console
        .execute(CoreCommand::SetFoodAvailability {
            id: EntityId::from(id),
            available,
        })
        .await?;
    if !global.quiet {
        eprintln!(
            "Menu item {}",
            if available { "enabled" } else { "disabled" }
        );
    }
    Ok(())
}
