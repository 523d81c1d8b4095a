use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub toppings: Vec<Topping>,
}

#[derive(Deserialize)]
pub struct PizzaInput {
    pub name: String,
    #[serde(default)]
    pub topping_ids: Vec<i64>,
}

/// In-memory menu: pizzas keyed by id plus a fixed topping catalog.
#[derive(Debug, Default)]
pub struct Menu {
    pizzas: BTreeMap<i64, Pizza>,
    toppings: Vec<Topping>,
    next_id: i64,
}

impl Menu {
    pub fn with_toppings(toppings: Vec<Topping>) -> Self {
        Self {
            pizzas: BTreeMap::new(),
            toppings,
            next_id: 1,
        }
    }

    /// Resolve ids against the catalog; `None` if any id is unknown.
    fn resolve(&self, ids: &[i64]) -> Option<Vec<Topping>> {
        ids.iter()
            .map(|id| self.toppings.iter().find(|t| t.id == *id).cloned())
            .collect()
    }
}

pub type Db = Arc<RwLock<Menu>>;

pub fn default_toppings() -> Vec<Topping> {
    ["Cheese", "Tomato", "Basil", "Ham", "Pineapple", "Mushroom", "Peppers", "Onion"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Topping {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn app() -> Router {
    app_with_toppings(default_toppings())
}

pub fn app_with_toppings(toppings: Vec<Topping>) -> Router {
    let db: Db = Arc::new(RwLock::new(Menu::with_toppings(toppings)));
    Router::new()
        .route("/api/v1/toppings", get(list_toppings))
        .route("/api/v1/pizzas", get(list_pizzas).post(create_pizza))
        .route(
            "/api/v1/pizzas/{id}",
            get(get_pizza).put(update_pizza).delete(delete_pizza),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock pizza server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_toppings(State(db): State<Db>) -> Json<Vec<Topping>> {
    Json(db.read().await.toppings.clone())
}

async fn list_pizzas(State(db): State<Db>) -> Json<Vec<Pizza>> {
    let menu = db.read().await;
    Json(menu.pizzas.values().cloned().collect())
}

async fn create_pizza(
    State(db): State<Db>,
    Json(input): Json<PizzaInput>,
) -> Result<(StatusCode, Json<Pizza>), StatusCode> {
    let mut menu = db.write().await;
    let toppings = menu
        .resolve(&input.topping_ids)
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let pizza = Pizza {
        id: menu.next_id,
        name: input.name,
        toppings,
    };
    menu.next_id += 1;
    menu.pizzas.insert(pizza.id, pizza.clone());
    debug!(id = pizza.id, "pizza created");
    Ok((StatusCode::CREATED, Json(pizza)))
}

async fn get_pizza(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Pizza>, StatusCode> {
    let menu = db.read().await;
    menu.pizzas.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_pizza(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<PizzaInput>,
) -> Result<Json<Pizza>, StatusCode> {
    let mut menu = db.write().await;
    let toppings = menu
        .resolve(&input.topping_ids)
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let pizza = menu.pizzas.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    pizza.name = input.name;
    pizza.toppings = toppings;
    debug!(id, "pizza updated");
    Ok(Json(pizza.clone()))
}

async fn delete_pizza(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut menu = db.write().await;
    menu.pizzas
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
