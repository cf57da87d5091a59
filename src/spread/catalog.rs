//! Built-in spread definitions.
//!
//! Hand-authored and trusted. The coordinates of `cruz-celta` and
//! `conselho-universo` mirror their named layout templates so the
//! authored data and the computed layout agree.

use std::sync::OnceLock;

use super::{Difficulty, Emphasis, SpreadLayoutKind, SpreadPosition, TarotSpread};

static BUILTINS: OnceLock<Vec<TarotSpread>> = OnceLock::new();

/// All built-in spreads, in display order.
pub fn builtin_spreads() -> &'static [TarotSpread] {
    BUILTINS.get_or_init(|| {
        vec![
            carta_do_dia(),
            tres_cartas(),
            cruz_celta(),
            conselho_universo(),
        ]
    })
}

pub fn find_builtin(slug: &str) -> Option<&'static TarotSpread> {
    builtin_spreads().iter().find(|s| s.slug == slug)
}

fn pos(id: &str, order: usize, label: &str, description: &str, x: f64, y: f64) -> SpreadPosition {
    SpreadPosition {
        id: id.to_string(),
        order,
        label: label.to_string(),
        description: description.to_string(),
        x,
        y,
        rotation: None,
        emphasis: None,
        connected_to: vec![],
    }
}

fn with_emphasis(mut p: SpreadPosition, emphasis: Emphasis) -> SpreadPosition {
    p.emphasis = Some(emphasis);
    p
}

fn connected(mut p: SpreadPosition, to: &[&str]) -> SpreadPosition {
    p.connected_to = to.iter().map(|s| s.to_string()).collect();
    p
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn carta_do_dia() -> TarotSpread {
    TarotSpread {
        slug: "carta-do-dia".to_string(),
        name: "Carta do Dia".to_string(),
        description: "Uma carta para orientar o seu dia.".to_string(),
        card_count: 1,
        category: "diaria".to_string(),
        layout: SpreadLayoutKind::Linear,
        difficulty: Difficulty::Beginner,
        tags: tags(&["rapida", "diaria"]),
        positions: vec![with_emphasis(
            pos("dia", 1, "Mensagem do dia", "A energia que acompanha o seu dia.", 50.0, 50.0),
            Emphasis::Center,
        )],
    }
}

fn tres_cartas() -> TarotSpread {
    TarotSpread {
        slug: "tres-cartas".to_string(),
        name: "Passado, Presente e Futuro".to_string(),
        description: "A leitura clássica de três cartas sobre o fluxo do tempo.".to_string(),
        card_count: 3,
        category: "geral".to_string(),
        layout: SpreadLayoutKind::Linear,
        difficulty: Difficulty::Beginner,
        tags: tags(&["tempo", "classica"]),
        positions: vec![
            connected(pos("passado", 1, "Passado", "O que trouxe você até aqui.", 18.0, 50.0), &["presente"]),
            connected(
                with_emphasis(pos("presente", 2, "Presente", "O momento atual.", 50.0, 50.0), Emphasis::Center),
                &["futuro"],
            ),
            pos("futuro", 3, "Futuro", "Para onde a energia aponta.", 82.0, 50.0),
        ],
    }
}

fn cruz_celta() -> TarotSpread {
    let mut desafio = pos("desafio", 2, "Desafio", "O que cruza o seu caminho.", 38.0, 50.0);
    desafio.rotation = Some(90.0);

    TarotSpread {
        slug: "cruz-celta".to_string(),
        name: "Cruz Celta".to_string(),
        description: "Leitura profunda em dez cartas sobre uma situação.".to_string(),
        card_count: 10,
        category: "profunda".to_string(),
        layout: SpreadLayoutKind::Cross,
        difficulty: Difficulty::Advanced,
        tags: tags(&["classica", "completa"]),
        positions: vec![
            connected(
                with_emphasis(
                    pos("situacao", 1, "Situação", "O coração da questão.", 38.0, 50.0),
                    Emphasis::Center,
                ),
                &["base", "passado", "coroa", "futuro"],
            ),
            desafio,
            with_emphasis(pos("base", 3, "Base", "A raiz inconsciente.", 38.0, 78.0), Emphasis::Bottom),
            with_emphasis(pos("passado", 4, "Passado recente", "O que está se afastando.", 16.0, 50.0), Emphasis::Left),
            with_emphasis(pos("coroa", 5, "Coroa", "O ideal consciente.", 38.0, 22.0), Emphasis::Top),
            with_emphasis(pos("futuro", 6, "Futuro próximo", "O que se aproxima.", 60.0, 50.0), Emphasis::Right),
            connected(pos("voce", 7, "Você", "Sua postura diante da questão.", 82.0, 84.0), &["ambiente"]),
            connected(pos("ambiente", 8, "Ambiente", "As influências ao redor.", 82.0, 62.0), &["esperancas"]),
            connected(pos("esperancas", 9, "Esperanças e medos", "O que você deseja e teme.", 82.0, 40.0), &["resultado"]),
            with_emphasis(pos("resultado", 10, "Resultado", "O desfecho provável.", 82.0, 18.0), Emphasis::Highlight),
        ],
    }
}

fn conselho_universo() -> TarotSpread {
    let around = [
        ("espirito", "Espírito", "O propósito maior.", 50.0, 15.0),
        ("agua", "Água", "Emoções e intuição.", 83.3, 39.2),
        ("fogo", "Fogo", "Vontade e ação.", 70.6, 78.3),
        ("terra", "Terra", "Corpo e matéria.", 29.4, 78.3),
        ("ar", "Ar", "Pensamento e comunicação.", 16.7, 39.2),
    ];

    let mut positions = vec![connected(
        with_emphasis(pos("voce", 1, "Você", "O centro da consulta.", 50.0, 50.0), Emphasis::Center),
        &["espirito", "agua", "fogo", "terra", "ar"],
    )];
    for (i, (id, label, description, x, y)) in around.iter().enumerate() {
        positions.push(pos(id, i + 2, label, description, *x, *y));
    }

    TarotSpread {
        slug: "conselho-universo".to_string(),
        name: "Conselho do Universo".to_string(),
        description: "Cinco elementos em pentagrama ao redor de você.".to_string(),
        card_count: 6,
        category: "espiritual".to_string(),
        layout: SpreadLayoutKind::Circle,
        difficulty: Difficulty::Intermediate,
        tags: tags(&["elementos", "pentagrama"]),
        positions,
    }
}
