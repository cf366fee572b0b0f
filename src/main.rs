// ==========================================
// 动物园 - 饲养一览输出
// ==========================================
// 用法: zoo-report [config.json]
// 无参数时使用默认配置 + 环境变量
// ==========================================

use anyhow::Context;
use std::path::Path;
use zoo_db::{i18n, logging, DbAccess, DbConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DbConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("failed to load config: {}", path))?,
        None => DbConfig::from_env(),
    };
    i18n::set_locale(&config.locale);

    tracing::info!(
        version = zoo_db::VERSION,
        database = %config.database_path.display(),
        "zoo-report"
    );

    let db = DbAccess::init(config)?;
    let lines = db.get_all_animal_inf_list()?;

    if lines.is_empty() {
        println!("{}", i18n::t("report.empty"));
    }
    for line in &lines {
        println!("{}", line);
    }
    Ok(())
}
