use bookshelf_store::BookStore;
use bookshelf_web::{BookService, SeedBook, ServiceError};
use pretty_assertions::assert_eq;

fn test_service() -> BookService {
    BookService::new(BookStore::open_in_memory().unwrap())
}

fn test_seed() -> Vec<SeedBook> {
    vec![
        SeedBook {
            id: 1,
            title: "Flask 101".into(),
            author: "John Doe".into(),
        },
        SeedBook {
            id: 2,
            title: "Python Web Development".into(),
            author: "Jane Smith".into(),
        },
    ]
}

// ── Create / find ────────────────────────────────────────────────

#[test]
fn create_then_find_returns_matching_fields() {
    let service = test_service();
    let created = service.create_book("Dune", "Frank Herbert").unwrap();

    let found = service.find_book(created.id).unwrap().unwrap();
    assert_eq!(found.title, "Dune");
    assert_eq!(found.author, "Frank Herbert");
}

#[test]
fn create_with_empty_title_is_rejected() {
    let service = test_service();
    let err = service.create_book("", "Frank Herbert").unwrap_err();
    assert!(matches!(err, ServiceError::EmptyField("title")));
    assert!(service.list_books().unwrap().is_empty());
}

#[test]
fn create_with_empty_author_is_rejected() {
    let service = test_service();
    let err = service.create_book("Dune", "").unwrap_err();
    assert!(matches!(err, ServiceError::EmptyField("author")));
}

#[test]
fn find_absent_is_none() {
    let service = test_service();
    assert!(service.find_book(999).unwrap().is_none());
}

// ── Update ───────────────────────────────────────────────────────

#[test]
fn update_is_idempotent() {
    let service = test_service();
    let book = service.create_book("Dine", "Frank Herbert").unwrap();

    service.update_book(book.id, "Dune", "Frank Herbert").unwrap();
    let once = service.list_books().unwrap();
    service.update_book(book.id, "Dune", "Frank Herbert").unwrap();
    let twice = service.list_books().unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice[0].title, "Dune");
}

#[test]
fn update_missing_is_not_found() {
    let service = test_service();
    let err = service.update_book(999, "Dune", "Frank Herbert").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(999)));
}

#[test]
fn update_missing_reports_not_found_before_validation() {
    let service = test_service();
    let err = service.update_book(999, "", "").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(999)));
}

#[test]
fn update_with_empty_field_is_rejected() {
    let service = test_service();
    let book = service.create_book("Dune", "Frank Herbert").unwrap();

    let err = service.update_book(book.id, "", "Frank Herbert").unwrap_err();
    assert!(matches!(err, ServiceError::EmptyField("title")));

    // Stored state unchanged.
    let found = service.find_book(book.id).unwrap().unwrap();
    assert_eq!(found.title, "Dune");
}

// ── Delete ───────────────────────────────────────────────────────

#[test]
fn delete_then_find_is_none() {
    let service = test_service();
    let book = service.create_book("Dune", "Frank Herbert").unwrap();

    service.delete_book(book.id).unwrap();
    assert!(service.find_book(book.id).unwrap().is_none());
}

#[test]
fn delete_missing_is_not_found() {
    let service = test_service();
    let err = service.delete_book(999).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(999)));
}

// ── Seed ─────────────────────────────────────────────────────────

#[test]
fn seed_inserts_fixed_ids() {
    let service = test_service();
    let inserted = service.seed(&test_seed()).unwrap();
    assert_eq!(inserted, 2);

    let book = service.find_book(1).unwrap().unwrap();
    assert_eq!(book.title, "Flask 101");
    assert_eq!(book.author, "John Doe");
    let book = service.find_book(2).unwrap().unwrap();
    assert_eq!(book.title, "Python Web Development");
    assert_eq!(book.author, "Jane Smith");
}

#[test]
fn seed_twice_is_idempotent() {
    let service = test_service();
    service.seed(&test_seed()).unwrap();
    let once = service.list_books().unwrap();

    let inserted = service.seed(&test_seed()).unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(service.list_books().unwrap(), once);
}

#[test]
fn seed_skips_existing_ids_but_inserts_the_rest() {
    let service = test_service();
    service.seed(&test_seed()[..1]).unwrap();

    let inserted = service.seed(&test_seed()).unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(service.list_books().unwrap().len(), 2);
}
