// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================

#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;
use zoo_db::{Cage, DbAccess, DbConfig};

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().ok_or("non-utf8 temp path")?.to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 初始化数据库 schema
///
/// t_ribbon_animal.name 上不建唯一索引，佩戴的唯一性由仓储保证
fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS m_cage (
            cd INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS m_animal (
            cd INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS m_ribbon (
            name TEXT PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS t_cage_animal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            cage_cd INTEGER NOT NULL REFERENCES m_cage(cd),
            animal_cd INTEGER NOT NULL REFERENCES m_animal(cd),
            weight INTEGER NOT NULL,
            name TEXT
        );

        CREATE TABLE IF NOT EXISTS t_ribbon_animal (
            name TEXT NOT NULL REFERENCES m_ribbon(name),
            animal_id INTEGER NOT NULL REFERENCES t_cage_animal(id)
        );
        "#,
    )?;
    Ok(())
}

/// 打开测试连接（开启外键）
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// 插入主数据
///
/// - 檻: (1, LandCage, land), (2, Sky, aerial), (3, Pool, aquatic)
/// - 动物: (1, ライオン, lion), (7, ペンギン, penguin), (8, イルカ, dolphin)
/// - 缎带: gold, silver
pub fn insert_master_data(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        INSERT INTO m_cage (cd, name, type) VALUES
            (1, 'LandCage', 'land'),
            (2, 'Sky', 'aerial'),
            (3, 'Pool', 'aquatic');

        INSERT INTO m_animal (cd, name, type) VALUES
            (1, 'ライオン', 'lion'),
            (7, 'ペンギン', 'penguin'),
            (8, 'イルカ', 'dolphin');

        INSERT INTO m_ribbon (name) VALUES ('gold'), ('silver');
        "#,
    )?;
    Ok(())
}

/// 直接插入一只饲养动物，返回 id
pub fn insert_animal(
    conn: &Connection,
    cage_cd: i32,
    animal_cd: i32,
    weight: i32,
    name: Option<&str>,
) -> Result<i64, Box<dyn Error>> {
    conn.execute(
        "INSERT INTO t_cage_animal (cage_cd, animal_cd, weight, name) VALUES (?1, ?2, ?3, ?4)",
        params![cage_cd, animal_cd, weight, name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// 已建 schema 并插入主数据的数据库 + 数据访问句柄
pub fn setup_seeded() -> (NamedTempFile, String, DbAccess) {
    let (temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_master_data(&conn).expect("Failed to insert master data");
    drop(conn);

    let db = DbAccess::init(DbConfig::with_path(&db_path)).expect("Failed to init DbAccess");
    (temp_file, db_path, db)
}

/// 按代码取得檻
pub fn cage_by_code(db: &DbAccess, code: i32) -> Cage {
    db.get_cages()
        .expect("Failed to get cages")
        .into_iter()
        .find(|c| c.code == code)
        .expect("cage not found")
}
