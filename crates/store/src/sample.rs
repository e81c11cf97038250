//! Demo dataset of the portal
//!
//! A small, fixed set of business entities used by the end-to-end tests and
//! available to hosts as a quick-start fixture. The content mirrors the
//! portal's mock data (Spanish-language names and descriptions).

use crate::record_store::InMemoryRecordStore;
use atrium_core::Record;
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Fixture literals are always valid calendar dates
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

/// All demo records, flat and in fixture order
pub fn sample_records() -> Vec<Record> {
    vec![
        // Projects
        Record::Project {
            id: "p-1001".into(),
            name: "Proyecto Alpha".into(),
            description: "Desarrollo de aplicación web para gestión interna".into(),
            status: "active".into(),
            tags: vec!["web".into(), "interno".into()],
            owner: "Laura Ortiz".into(),
            created_at: date(2024, 1, 15),
        },
        Record::Project {
            id: "p-1002".into(),
            name: "Proyecto Beta".into(),
            description: "Migración de infraestructura a la nube".into(),
            status: "planning".into(),
            tags: vec!["cloud".into()],
            owner: "Carlos Ruiz".into(),
            created_at: date(2024, 3, 2),
        },
        Record::Project {
            id: "p-1003".into(),
            name: "Portal de Clientes".into(),
            description: "Rediseño del portal público de clientes".into(),
            status: "active".into(),
            tags: vec!["web".into(), "ux".into()],
            owner: "Laura Ortiz".into(),
            created_at: date(2023, 11, 20),
        },
        // Assistants
        Record::Assistant {
            id: "a-2001".into(),
            name: "Asistente Comercial".into(),
            description: "Responde consultas de ventas y tarifas".into(),
            capabilities: vec!["ventas".into(), "tarifas".into(), "crm".into()],
            status: "online".into(),
        },
        Record::Assistant {
            id: "a-2002".into(),
            name: "Asistente de Soporte".into(),
            description: "Atiende incidencias técnicas de primer nivel".into(),
            capabilities: vec!["soporte".into(), "incidencias".into()],
            status: "online".into(),
        },
        // Users
        Record::User {
            id: "u-3001".into(),
            name: "Juan Pérez".into(),
            email: "juan.perez@example.com".into(),
            role: "manager".into(),
            department: "Ventas".into(),
        },
        Record::User {
            id: "u-3002".into(),
            name: "María García".into(),
            email: "maria.garcia@example.com".into(),
            role: "analyst".into(),
            department: "Finanzas".into(),
        },
        Record::User {
            id: "u-3003".into(),
            name: "Lucía Fernández".into(),
            email: "lucia.fernandez@example.com".into(),
            role: "admin".into(),
            department: "IT".into(),
        },
        // Tasks
        Record::Task {
            id: "t-4001".into(),
            title: "Revisar presupuesto 2024".into(),
            description: "Consolidar partidas y validar con Finanzas".into(),
            status: "open".into(),
            priority: "high".into(),
            assignee: "Juan Pérez".into(),
            due_at: Some(date(2024, 4, 30)),
        },
        Record::Task {
            id: "t-4002".into(),
            title: "Preparar demo del portal".into(),
            description: "Entorno de pruebas con datos de ejemplo".into(),
            status: "in-progress".into(),
            priority: "medium".into(),
            assignee: "María García".into(),
            due_at: None,
        },
        // Invoices
        Record::Invoice {
            id: "i-5001".into(),
            number: "INV-2024-001".into(),
            client: "Acme Corp".into(),
            concept: "Servicios de consultoría enero 2024".into(),
            status: "paid".into(),
            amount_cents: 125_000,
            issued_at: date(2024, 1, 31),
        },
        Record::Invoice {
            id: "i-5002".into(),
            number: "INV-2024-002".into(),
            client: "Globex".into(),
            concept: "Mantenimiento anual de plataforma".into(),
            status: "pending".into(),
            amount_cents: 420_000,
            issued_at: date(2024, 2, 15),
        },
        // Reports
        Record::Report {
            id: "r-6001".into(),
            title: "Informe trimestral de ventas".into(),
            summary: "Evolución de ventas y previsión del siguiente trimestre".into(),
            category: "ventas".into(),
            author: "María García".into(),
            published_at: date(2024, 4, 5),
        },
        Record::Report {
            id: "r-6002".into(),
            title: "Informe de rendimiento del portal".into(),
            summary: "Métricas de uso y tiempos de carga del portal".into(),
            category: "producto".into(),
            author: "Lucía Fernández".into(),
            published_at: date(2024, 3, 18),
        },
    ]
}

/// The demo dataset, already grouped into an [`InMemoryRecordStore`]
pub fn sample_store() -> InMemoryRecordStore {
    InMemoryRecordStore::with_records(sample_records())
}
