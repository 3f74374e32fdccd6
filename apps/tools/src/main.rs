use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::OrdersClient;
use shared::{
    domain::{Order, OrderId},
    protocol::{CreateOrderRequest, UpdateOrderRequest},
};

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "http://localhost:5000")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every order.
    List,
    /// Fetch a single order by id.
    Get { id: String },
    /// List the orders assigned to one waiter.
    ByWaiter { waiter: String },
    /// Create an order.
    Create {
        #[arg(long)]
        dish: String,
        #[arg(long)]
        waiter: String,
        #[arg(long)]
        table: u32,
        #[arg(long)]
        price: f64,
    },
    /// Replace every field of an order.
    Update {
        id: String,
        #[arg(long)]
        dish: String,
        #[arg(long)]
        waiter: String,
        #[arg(long)]
        table: u32,
        #[arg(long)]
        price: f64,
    },
    /// Reassign the waiter on an order.
    ChangeWaiter { id: String, waiter: String },
    /// Delete an order.
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = OrdersClient::new(cli.server_url);

    match cli.command {
        Command::List => {
            for order in client.fetch_all_orders().await? {
                print_order(&order);
            }
        }
        Command::Get { id } => {
            print_order(&client.fetch_order(&OrderId(id)).await?);
        }
        Command::ByWaiter { waiter } => {
            for order in client.fetch_orders_by_waiter(&waiter).await? {
                print_order(&order);
            }
        }
        Command::Create {
            dish,
            waiter,
            table,
            price,
        } => {
            client
                .create_order(&CreateOrderRequest {
                    server: waiter,
                    dish,
                    table,
                    price,
                })
                .await?;
            println!("order created");
        }
        Command::Update {
            id,
            dish,
            waiter,
            table,
            price,
        } => {
            client
                .update_order(
                    &OrderId(id),
                    &UpdateOrderRequest {
                        dish,
                        server: waiter,
                        table,
                        price,
                    },
                )
                .await?;
            println!("order updated");
        }
        Command::ChangeWaiter { id, waiter } => {
            client.update_waiter(&OrderId(id), &waiter).await?;
            println!("waiter reassigned");
        }
        Command::Delete { id } => {
            client.delete_order(&OrderId(id)).await?;
            println!("order deleted");
        }
    }

    Ok(())
}

fn print_order(order: &Order) {
    println!(
        "{}  dish={} server={} table={} price={:.2}",
        order.id, order.dish, order.server, order.table, order.price
    );
}
