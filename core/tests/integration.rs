//! Full menu workflow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `PizzaService`
//! command over real HTTP through `UreqTransport`. Validates that request
//! building, transport and response parsing work end-to-end.

use std::cell::{Cell, RefCell};

use pizza_core::{
    ApiError, ClientConfig, Deletion, Interaction, NewPizzaForm, Pizza, PizzaError, PizzaService,
    Topping, UreqTransport, ValidationError,
};

struct ScriptedUser {
    answer: bool,
    notices: RefCell<Vec<String>>,
}

impl ScriptedUser {
    fn answering(answer: bool) -> Self {
        Self {
            answer,
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl Interaction for ScriptedUser {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn topping(id: i64, name: &str) -> Topping {
    Topping {
        id,
        name: name.to_string(),
    }
}

#[test]
fn menu_lifecycle() {
    let base_url = start_server();
    let service = PizzaService::from_config(&ClientConfig::new(&base_url), UreqTransport::new());
    let yes = ScriptedUser::answering(true);
    let mut store: Vec<Pizza> = Vec::new();

    // Step 1: fetch, menu starts empty.
    service.fetch_pizzas(&mut store).unwrap();
    assert!(store.is_empty(), "expected empty menu");

    // Step 2: create two pizzas through the form.
    let mut form = NewPizzaForm::new("Margherita", vec![1, 2]);
    let margherita = service.add_pizza(&mut form, &mut store).unwrap();
    assert_eq!(margherita.toppings, vec![topping(1, "Cheese"), topping(2, "Tomato")]);
    assert_eq!(form, NewPizzaForm::default());

    let mut form = NewPizzaForm::new("Hawaiian", vec![4, 5]);
    let hawaiian = service.add_pizza(&mut form, &mut store).unwrap();
    assert_eq!(store, vec![margherita.clone(), hawaiian.clone()]);

    // Step 3: an edit that collides with Margherita's toppings is refused locally.
    let err = service
        .save_edit(
            &hawaiian,
            "Hawaiian",
            &[topping(2, "Tomato"), topping(1, "Cheese")],
            &mut store,
            &yes,
            || panic!("edit mode must stay open"),
        )
        .unwrap_err();
    assert!(matches!(err, PizzaError::Validation(ValidationError::DuplicateToppings)));

    // Step 4: a valid edit reaches the server and the store.
    let cancelled = Cell::new(0);
    let new_toppings = vec![topping(4, "Ham"), topping(6, "Mushroom")];
    service
        .save_edit(&hawaiian, "Ham & Mushroom", &new_toppings, &mut store, &yes, || {
            cancelled.set(cancelled.get() + 1)
        })
        .unwrap();
    assert_eq!(cancelled.get(), 1);
    assert_eq!(store[0], margherita);
    assert_eq!(store[1].name, "Ham & Mushroom");

    // Step 5: a fresh fetch agrees with the local store.
    let mut fresh: Vec<Pizza> = Vec::new();
    service.fetch_pizzas(&mut fresh).unwrap();
    assert_eq!(fresh, store);

    // Step 6: declined delete keeps everything.
    let no = ScriptedUser::answering(false);
    let outcome = service.delete_pizza(margherita.id, &mut store, &no).unwrap();
    assert_eq!(outcome, Deletion::Declined);
    assert_eq!(store.len(), 2);

    // Step 7: confirmed delete removes it locally and remotely.
    let outcome = service.delete_pizza(margherita.id, &mut store, &yes).unwrap();
    assert_eq!(outcome, Deletion::Deleted);
    assert_eq!(store.len(), 1);
    service.fetch_pizzas(&mut fresh).unwrap();
    assert_eq!(fresh, store);

    // Step 8: deleting again surfaces the 404 to the user.
    let err = service.delete_pizza(margherita.id, &mut store, &yes).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(
        yes.notices.borrow().last().map(String::as_str),
        Some("Error deleting pizza: resource not found")
    );
}

#[test]
fn create_with_unknown_topping_propagates() {
    let base_url = start_server();
    let service = PizzaService::from_config(&ClientConfig::new(&base_url), UreqTransport::new());
    let mut store: Vec<Pizza> = Vec::new();
    let mut form = NewPizzaForm::new("Mystery", vec![999]);

    let err = service.add_pizza(&mut form, &mut store).unwrap_err();

    assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
    assert!(store.is_empty());
    assert_eq!(form.name, "Mystery");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let service = PizzaService::from_config(
        &ClientConfig::new(&format!("http://{addr}")),
        UreqTransport::new(),
    );
    let mut store = vec![Pizza {
        id: 1,
        name: "Cached".to_string(),
        toppings: Vec::new(),
    }];

    let err = service.fetch_pizzas(&mut store).unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(store.len(), 1);
}
