// ==========================================
// 饲养动物集成测试
// ==========================================
// 测试目标: 放入檻 → 按檻查询 → 按 id 查询
// ==========================================

mod test_helpers;

use std::sync::Arc;
use zoo_db::{CatalogAnimalFactory, DbAccess, DbConfig, ErrorKind, Species};

#[test]
fn test_add_then_list_contains_new_animal() {
    let (_temp_file, _db_path, db) = test_helpers::setup_seeded();
    let cage1 = test_helpers::cage_by_code(&db, 1);

    let before = db.get_animals(&cage1).unwrap();
    db.add_animal_to_cage(&cage1, 7, 42).unwrap();
    let after = db.get_animals(&cage1).unwrap();

    assert_eq!(after.len(), before.len() + 1);
    let added: Vec<_> = after
        .iter()
        .filter(|a| !before.iter().any(|b| b.id == a.id))
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].cage_code, 1);
    assert_eq!(added[0].species_code, 7);
    assert_eq!(added[0].weight, 42);
}

#[test]
fn test_animals_belong_to_requested_cage() {
    let (_temp_file, db_path, db) = test_helpers::setup_seeded();
    let conn = test_helpers::open_test_connection(&db_path).unwrap();
    test_helpers::insert_animal(&conn, 1, 1, 190, Some("Leo")).unwrap();
    test_helpers::insert_animal(&conn, 2, 7, 30, None).unwrap();
    test_helpers::insert_animal(&conn, 1, 1, 170, None).unwrap();
    drop(conn);

    for cage in db.get_cages().unwrap() {
        for animal in db.get_animals(&cage).unwrap() {
            assert_eq!(animal.cage_code, cage.code);
        }
    }
    let cage1 = test_helpers::cage_by_code(&db, 1);
    let weights: Vec<_> = db.get_animals(&cage1).unwrap().iter().map(|a| a.weight).collect();
    assert_eq!(weights, vec![190, 170]);
}

#[test]
fn test_get_animal_by_id() {
    let (_temp_file, db_path, db) = test_helpers::setup_seeded();
    let conn = test_helpers::open_test_connection(&db_path).unwrap();
    let id = test_helpers::insert_animal(&conn, 2, 7, 30, None).unwrap();
    drop(conn);

    let animal = db.get_animal(id).unwrap().expect("animal should exist");
    assert_eq!(animal.id, id);
    assert_eq!(animal.cage_code, 2);
    assert_eq!(animal.species_code, 7);
    assert_eq!(animal.weight, 30);

    assert_eq!(db.get_animal(id + 100).unwrap(), None);
}

#[test]
fn test_catalog_factory_resolves_species_of_kept_animals() {
    let (_temp_file, db_path, plain) = test_helpers::setup_seeded();
    let types = plain.get_animal_type_list().unwrap();
    let db = DbAccess::with_factory(
        DbConfig::with_path(&db_path),
        Arc::new(CatalogAnimalFactory::from_catalog(&types)),
    )
    .unwrap();

    let pool = test_helpers::cage_by_code(&db, 3);
    db.add_named_animal_to_cage(&pool, 8, 150, "Flipper").unwrap();

    let animals = db.get_animals(&pool).unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0].species, Some(Species::Dolphin));
}

#[test]
fn test_named_animal_populates_name_column() {
    let (_temp_file, db_path, db) = test_helpers::setup_seeded();
    let cage1 = test_helpers::cage_by_code(&db, 1);
    db.add_named_animal_to_cage(&cage1, 1, 190, "Leo").unwrap();
    db.add_animal_to_cage(&cage1, 1, 170).unwrap();

    let conn = test_helpers::open_test_connection(&db_path).unwrap();
    let names: Vec<Option<String>> = conn
        .prepare("SELECT name FROM t_cage_animal ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec![Some("Leo".to_string()), None]);
}

#[test]
fn test_unknown_cage_code_is_write_failure() {
    let (_temp_file, _db_path, db) = test_helpers::setup_seeded();
    let ghost = zoo_db::Cage::new(zoo_db::CageType::Land, "Ghost").with_code(99);

    let err = db.add_animal_to_cage(&ghost, 1, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
    assert!(matches!(
        err.cause(),
        zoo_db::repository::RepositoryError::ForeignKeyViolation(_)
    ));
}

#[test]
fn test_missing_table_is_query_failure() {
    let (_temp_file, db_path, db) = test_helpers::setup_seeded();
    let cage1 = test_helpers::cage_by_code(&db, 1);
    let conn = test_helpers::open_test_connection(&db_path).unwrap();
    conn.execute_batch("PRAGMA foreign_keys = OFF; DROP TABLE t_ribbon_animal; DROP TABLE t_cage_animal;")
        .unwrap();
    drop(conn);

    assert_eq!(db.get_animals(&cage1).unwrap_err().kind(), ErrorKind::Query);
    assert_eq!(db.get_animal(1).unwrap_err().kind(), ErrorKind::Query);
}
