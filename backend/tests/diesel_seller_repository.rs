//! Integration tests for the Diesel seller and book repositories against
//! embedded PostgreSQL.
//!
//! Each context boots its own cluster, provisions a database, applies the
//! embedded migrations and talks to it through a real `DbPool`.

use bookshop::domain::ports::{BookRepository, BookRepositoryError, SellerRepository};
use bookshop::domain::{CreateSellerInput, NewBook, Seller, SellerId, UpdateSellerInput};
use bookshop::outbound::persistence::{
    DbPool, DieselBookRepository, DieselSellerRepository, PoolConfig, apply_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{format_postgres_error, handle_cluster_setup_failure};

const TEST_DB: &str = "bookshop_repository_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    sellers: DieselSellerRepository,
    books: DieselBookRepository,
}

fn create_database(cluster: &TestCluster) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE {TEST_DB}"))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(TEST_DB))
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = create_database(&cluster)?;
    let applied = apply_migrations(&database_url).map_err(|err| err.to_string())?;
    if applied == 0 {
        return Err("fresh database reported no pending migrations".to_owned());
    }

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        sellers: DieselSellerRepository::new(pool.clone()),
        books: DieselBookRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

impl TestContext {
    fn create_seller(&self, email: &str) -> Seller {
        let input =
            CreateSellerInput::try_new("rs", "cr", email, "1223").expect("valid seller input");
        self.runtime
            .block_on(self.sellers.create(&input))
            .expect("create seller")
    }

    fn add_book(&self, seller_id: SellerId, title: &str) {
        let book = NewBook {
            title: title.to_owned(),
            author: "Face".to_owned(),
            year: 2017,
            count_pages: 2,
            seller_id,
        };
        self.runtime
            .block_on(self.books.create(&book))
            .expect("create book");
    }

    fn stored_password(&self, seller_id: SellerId) -> String {
        let mut client = Client::connect(&self.database_url, NoTls).expect("connect");
        let row = client
            .query_one(
                "SELECT password FROM seller_table WHERE id = $1",
                &[&seller_id.get()],
            )
            .expect("seller row");
        row.get(0)
    }

    fn orphaned_book_count(&self, seller_id: SellerId) -> i64 {
        let mut client = Client::connect(&self.database_url, NoTls).expect("connect");
        let row = client
            .query_one(
                "SELECT count(*) FROM books_table WHERE seller_id = $1",
                &[&seller_id.get()],
            )
            .expect("count books");
        row.get(0)
    }
}

#[rstest]
fn migrations_are_idempotent(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: migrations_are_idempotent skipped");
        return;
    };

    let applied = apply_migrations(&context.database_url).expect("rerun migrations");

    assert_eq!(applied, 0);
}

#[rstest]
fn create_assigns_increasing_ids_and_list_returns_all(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: create_assigns_increasing_ids_and_list_returns_all skipped");
        return;
    };

    let first = context.create_seller("link49@gmail.com");
    let second = context.create_seller("igrlnk@gmail.com");
    let listed = context
        .runtime
        .block_on(context.sellers.list())
        .expect("list sellers");

    assert!(second.id() > first.id());
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
fn find_with_books_embeds_only_owned_books(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: find_with_books_embeds_only_owned_books skipped");
        return;
    };

    let owner = context.create_seller("link49@gmail.com");
    let other = context.create_seller("igrlnk@gmail.com");
    context.add_book(owner.id(), "Burger");
    context.add_book(owner.id(), "Pizza");
    context.add_book(other.id(), "Salad");

    let found = context
        .runtime
        .block_on(context.sellers.find_with_books(owner.id()))
        .expect("query seller")
        .expect("seller exists");

    assert_eq!(found.seller, owner);
    let titles: Vec<&str> = found.books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Burger", "Pizza"]);
    assert!(found.books.iter().all(|book| book.seller_id == owner.id()));
}

#[rstest]
fn find_with_books_reports_absent_seller(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: find_with_books_reports_absent_seller skipped");
        return;
    };

    let found = context
        .runtime
        .block_on(context.sellers.find_with_books(SellerId::new(404)))
        .expect("query seller");

    assert!(found.is_none());
}

#[rstest]
fn update_replaces_names_and_email_but_keeps_password(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!(
            "SKIP-TEST-CLUSTER: update_replaces_names_and_email_but_keeps_password skipped"
        );
        return;
    };

    let seller = context.create_seller("link49@gmail.com");
    let changes =
        UpdateSellerInput::try_new("Igor", "Link", "not-checked").expect("valid changes");

    let updated = context
        .runtime
        .block_on(context.sellers.update(seller.id(), &changes))
        .expect("update seller")
        .expect("seller exists");

    assert_eq!(updated.id(), seller.id());
    assert_eq!(updated.first_name(), "Igor");
    assert_eq!(updated.last_name(), "Link");
    assert_eq!(updated.email(), "not-checked");
    assert_eq!(updated.password().expose(), "1223");
    assert_eq!(context.stored_password(seller.id()), "1223");
}

#[rstest]
fn update_of_unknown_seller_returns_none(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: update_of_unknown_seller_returns_none skipped");
        return;
    };

    let changes =
        UpdateSellerInput::try_new("Igor", "Link", "igrlnk@gmail.com").expect("valid changes");

    let updated = context
        .runtime
        .block_on(context.sellers.update(SellerId::new(404), &changes))
        .expect("update runs");

    assert!(updated.is_none());
}

#[rstest]
fn delete_with_books_removes_seller_and_its_books(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_with_books_removes_seller_and_its_books skipped");
        return;
    };

    let doomed = context.create_seller("link49@gmail.com");
    let kept = context.create_seller("igrlnk@gmail.com");
    context.add_book(doomed.id(), "Burger");
    context.add_book(doomed.id(), "Pizza");
    context.add_book(kept.id(), "Salad");

    let removed = context
        .runtime
        .block_on(context.sellers.delete_with_books(doomed.id()))
        .expect("delete seller");

    assert!(removed);
    let found = context
        .runtime
        .block_on(context.sellers.find_with_books(doomed.id()))
        .expect("query seller");
    assert!(found.is_none());
    let remaining = context
        .runtime
        .block_on(context.books.list_by_seller(doomed.id()))
        .expect("list books");
    assert!(remaining.is_empty());
    assert_eq!(context.orphaned_book_count(doomed.id()), 0);
    let survivors = context
        .runtime
        .block_on(context.books.list_by_seller(kept.id()))
        .expect("list books");
    assert_eq!(survivors.len(), 1);
}

#[rstest]
fn delete_of_unknown_seller_reports_absence(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_of_unknown_seller_reports_absence skipped");
        return;
    };

    let removed = context
        .runtime
        .block_on(context.sellers.delete_with_books(SellerId::new(404)))
        .expect("delete runs");

    assert!(!removed);
}

#[rstest]
fn seller_ids_are_not_reused_after_delete(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: seller_ids_are_not_reused_after_delete skipped");
        return;
    };

    let first = context.create_seller("link49@gmail.com");
    context
        .runtime
        .block_on(context.sellers.delete_with_books(first.id()))
        .expect("delete seller");

    let second = context.create_seller("igrlnk@gmail.com");

    assert!(second.id() > first.id());
}

#[rstest]
fn book_for_unknown_seller_is_rejected(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: book_for_unknown_seller_is_rejected skipped");
        return;
    };

    let orphan = NewBook {
        title: "Burger".to_owned(),
        author: "Face".to_owned(),
        year: 2017,
        count_pages: 2,
        seller_id: SellerId::new(404),
    };

    let error = context
        .runtime
        .block_on(context.books.create(&orphan))
        .expect_err("foreign key enforced");

    assert_eq!(error, BookRepositoryError::unknown_seller(404_i64));
}
