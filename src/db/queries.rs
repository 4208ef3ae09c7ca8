//! CRUD queries for customers, units, courts, and the appointment listing.
//!
//! These entities carry no invariant beyond their primary key; the validated
//! appointment writes live in `booking::queries`.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::{Appointment, AppointmentListing, Court, CourtListing, Customer, Unit};

// ==================== customers ====================

pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, nome, telefone, endereco
        FROM "beach-box"."Cliente"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_customer(
    pool: &PgPool,
    id: Option<i32>,
    nome: &str,
    telefone: &str,
    endereco: &str,
) -> Result<i32, sqlx::Error> {
    match id {
        Some(id) => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Cliente" (id, nome, telefone, endereco)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(nome)
            .bind(telefone)
            .bind(endereco)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Cliente" (nome, telefone, endereco)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(nome)
            .bind(telefone)
            .bind(endereco)
            .fetch_one(pool)
            .await
        }
    }
}

pub async fn update_customer(
    pool: &PgPool,
    id: i32,
    nome: &str,
    telefone: &str,
    endereco: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE "beach-box"."Cliente"
        SET nome = $2, telefone = $3, endereco = $4
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(nome)
    .bind(telefone)
    .bind(endereco)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_customer(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "beach-box"."Cliente" WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ==================== units ====================

pub async fn list_units(pool: &PgPool) -> Result<Vec<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        r#"
        SELECT id, nome, localizacao, telefone
        FROM "beach-box"."Unidade"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_unit(
    pool: &PgPool,
    id: Option<i32>,
    nome: &str,
    localizacao: &str,
    telefone: &str,
) -> Result<i32, sqlx::Error> {
    match id {
        Some(id) => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Unidade" (id, nome, localizacao, telefone)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(nome)
            .bind(localizacao)
            .bind(telefone)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Unidade" (nome, localizacao, telefone)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(nome)
            .bind(localizacao)
            .bind(telefone)
            .fetch_one(pool)
            .await
        }
    }
}

pub async fn update_unit(
    pool: &PgPool,
    id: i32,
    nome: &str,
    localizacao: &str,
    telefone: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE "beach-box"."Unidade"
        SET nome = $2, localizacao = $3, telefone = $4
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(nome)
    .bind(localizacao)
    .bind(telefone)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_unit(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "beach-box"."Unidade" WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ==================== courts ====================

/// List courts with the owning unit's name joined.
pub async fn list_courts(pool: &PgPool) -> Result<Vec<CourtListing>, sqlx::Error> {
    sqlx::query_as::<_, CourtListing>(
        r#"
        SELECT q.id,
               q.nome,
               q.localizacao,
               q."idUnidade" AS id_unidade,
               u.nome AS unidade,
               q.precobase,
               q."estaDisponivel" AS esta_disponivel,
               q.tipo
        FROM "beach-box"."Quadra" q
        LEFT JOIN "beach-box"."Unidade" u ON q."idUnidade" = u.id
        ORDER BY q.id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_court(pool: &PgPool, id: i32) -> Result<Option<Court>, sqlx::Error> {
    sqlx::query_as::<_, Court>(
        r#"
        SELECT id,
               nome,
               localizacao,
               "idUnidade" AS id_unidade,
               precobase,
               "estaDisponivel" AS esta_disponivel,
               tipo
        FROM "beach-box"."Quadra"
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create_court(
    pool: &PgPool,
    id: Option<i32>,
    nome: &str,
    localizacao: &str,
    id_unidade: i32,
    precobase: Decimal,
    esta_disponivel: bool,
    tipo: &str,
) -> Result<i32, sqlx::Error> {
    match id {
        Some(id) => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Quadra"
                    (id, nome, localizacao, "idUnidade", precobase, "estaDisponivel", tipo)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(nome)
            .bind(localizacao)
            .bind(id_unidade)
            .bind(precobase)
            .bind(esta_disponivel)
            .bind(tipo)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Quadra"
                    (nome, localizacao, "idUnidade", precobase, "estaDisponivel", tipo)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(nome)
            .bind(localizacao)
            .bind(id_unidade)
            .bind(precobase)
            .bind(esta_disponivel)
            .bind(tipo)
            .fetch_one(pool)
            .await
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn update_court(
    pool: &PgPool,
    id: i32,
    nome: &str,
    localizacao: &str,
    id_unidade: i32,
    precobase: Decimal,
    esta_disponivel: bool,
    tipo: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE "beach-box"."Quadra"
        SET nome = $2,
            localizacao = $3,
            "idUnidade" = $4,
            precobase = $5,
            "estaDisponivel" = $6,
            tipo = $7
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(nome)
    .bind(localizacao)
    .bind(id_unidade)
    .bind(precobase)
    .bind(esta_disponivel)
    .bind(tipo)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn set_court_availability(
    pool: &PgPool,
    id: i32,
    esta_disponivel: bool,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE "beach-box"."Quadra"
        SET "estaDisponivel" = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(esta_disponivel)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_court(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "beach-box"."Quadra" WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ==================== appointments (reads) ====================

/// List appointments with customer, court, and unit names joined.
pub async fn list_appointments(pool: &PgPool) -> Result<Vec<AppointmentListing>, sqlx::Error> {
    sqlx::query_as::<_, AppointmentListing>(
        r#"
        SELECT a.id,
               a."dataHoraAgendamento" AS data_hora_agendamento,
               a.preco,
               a."idCliente" AS id_cliente,
               c.nome AS cliente,
               a."idQuadra" AS id_quadra,
               q.nome AS quadra,
               q."idUnidade" AS id_unidade,
               u.nome AS unidade
        FROM "beach-box"."Agendamento" a
        LEFT JOIN "beach-box"."Cliente" c ON a."idCliente" = c.id
        LEFT JOIN "beach-box"."Quadra" q ON a."idQuadra" = q.id
        LEFT JOIN "beach-box"."Unidade" u ON q."idUnidade" = u.id
        ORDER BY a.id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_appointment(pool: &PgPool, id: i32) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        r#"
        SELECT id,
               "dataHoraAgendamento" AS data_hora_agendamento,
               preco,
               "idQuadra" AS id_quadra,
               "idCliente" AS id_cliente
        FROM "beach-box"."Agendamento"
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
