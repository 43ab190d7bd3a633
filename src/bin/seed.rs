use axum_restaurant_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    seed_categories(&pool).await?;
    seed_meals(&pool).await?;
    seed_chefs(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_categories(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let categories = vec![
        ("Starters", "Small plates to begin with"),
        ("Mains", "Hearty main courses"),
        ("Desserts", "Sweet finales"),
        ("Drinks", "Hot and cold beverages"),
    ];

    for (name, description) in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    println!("Seeded categories");
    Ok(())
}

async fn seed_meals(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    // Prices in cents.
    let meals = vec![
        ("Bruschetta", "Grilled bread, tomato, basil", 650_i64, "Starters"),
        ("Wild Mushroom Soup", "Cream of forest mushrooms", 750, "Starters"),
        ("Green Ziti", "Baked ziti with pesto and mozzarella", 1450, "Mains"),
        ("Grilled Salmon", "With lemon butter and greens", 2150, "Mains"),
        ("Tiramisu", "Espresso-soaked classic", 850, "Desserts"),
        ("House Lemonade", "Fresh-squeezed, lightly sweet", 450, "Drinks"),
    ];

    for (name, description, price, category) in meals {
        sqlx::query(
            r#"
            INSERT INTO meals (name, description, price, category_id)
            SELECT $1, $2, $3, id FROM categories
            WHERE name = $4
              AND NOT EXISTS (SELECT 1 FROM meals WHERE name = $1)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category)
        .execute(pool)
        .await?;
    }

    println!("Seeded meals");
    Ok(())
}

async fn seed_chefs(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let chefs = vec![
        ("Elena Moretti", "Head Chef", "Twenty years of northern Italian kitchens."),
        ("Marc Dubois", "Pastry Chef", "Trained in Lyon, obsessed with chocolate."),
    ];

    for (fullname, specialization, about) in chefs {
        sqlx::query(
            r#"
            INSERT INTO chefs (fullname, specialization, about)
            SELECT $1, $2, $3
            WHERE NOT EXISTS (SELECT 1 FROM chefs WHERE fullname = $1)
            "#,
        )
        .bind(fullname)
        .bind(specialization)
        .bind(about)
        .execute(pool)
        .await?;
    }

    println!("Seeded chefs");
    Ok(())
}
