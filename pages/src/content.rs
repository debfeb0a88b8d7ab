//! Authored page content.
//!
//! Everything the technologies page says lives here; the components only
//! decide how it is laid out.

use crate::types::{PageMeta, TechCategory};

/// Tab title for the technologies page.
pub const TECHNOLOGIES_TITLE: &str = "О проекте";

/// Meta description for the technologies page.
pub const TECHNOLOGIES_DESCRIPTION: &str = "Фудграм - Технологии";

/// Visible `<h1>` text.
pub const TECHNOLOGIES_HEADING: &str = "Технологии";

/// Technology stack, in display order.
pub const TECHNOLOGIES: &[TechCategory] = &[
    TechCategory {
        label: "Backend:",
        items: &[
            "Python — основной язык программирования.",
            "Django — фреймворк для разработки веб-приложений.",
            "Django REST Framework — библиотека для создания RESTful API.",
            "Djoser — библиотека для управления аутентификацией пользователей через REST API.",
            "Gunicorn — WSGI HTTP сервер для запуска приложения Django.",
        ],
    },
    TechCategory {
        label: "Frontend:",
        items: &["React — фреймворк для создания одностраничных приложений (SPA)."],
    },
    TechCategory {
        label: "Инфраструктура и развертывание:",
        items: &[
            "Docker — контейнеризация приложения (отдельные контейнеры для backend, frontend и nginx).",
            "Nginx — веб-сервер и обратный прокси для управления запросами.",
            "PostgreSQL — реляционная база данных.",
        ],
    },
    TechCategory {
        label: "CI/CD и автоматизация:",
        items: &[
            "GitHub Actions — автоматизация процессов тестирования и деплоя (CI/CD).",
            "Ubuntu — операционная система сервера для развертывания приложения.",
        ],
    },
];

/// Head metadata for the technologies page.
pub fn technologies_meta() -> PageMeta {
    PageMeta {
        title: TECHNOLOGIES_TITLE.into(),
        description: TECHNOLOGIES_DESCRIPTION.into(),
        og_title: TECHNOLOGIES_TITLE.into(),
    }
}
