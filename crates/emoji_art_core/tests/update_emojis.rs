use emoji_art_core::{update, DocumentState, Emoji, Msg, Size};

fn add(state: DocumentState, text: &str, at: (i32, i32), size: f64) -> DocumentState {
    update(
        state,
        Msg::AddEmoji {
            text: text.to_string(),
            at,
            size,
        },
    )
    .0
}

fn first(state: &DocumentState) -> Emoji {
    state.emojis()[0].clone()
}

#[test]
fn added_emojis_get_increasing_unique_ids() {
    let mut state = DocumentState::new();
    for i in 0..10 {
        state = add(state, "😀", (i, -i), 40.0);
    }

    let ids: Vec<_> = state.emojis().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 10);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn add_truncates_size_toward_zero() {
    let state = add(DocumentState::new(), "🐱", (5, 6), 39.9);
    let state = add(state, "🐶", (0, 0), -2.7);

    assert_eq!(state.emojis()[0].size, 39);
    assert_eq!((state.emojis()[0].x, state.emojis()[0].y), (5, 6));
    assert_eq!(state.emojis()[1].size, -2);
}

#[test]
fn move_adds_truncated_offset() {
    let state = add(DocumentState::new(), "🐱", (10, 10), 40.0);
    let emoji = first(&state);

    let (mut state, effects) = update(
        state,
        Msg::MoveEmoji {
            emoji,
            offset: Size::new(5.9, -3.9),
        },
    );

    assert!(effects.is_empty());
    assert_eq!((state.emojis()[0].x, state.emojis()[0].y), (15, 7));
    assert!(state.consume_dirty());
}

#[test]
fn move_matches_by_identity_not_value() {
    let state = add(DocumentState::new(), "🐱", (10, 10), 40.0);
    let mut stale = first(&state);
    stale.text = "something else".to_string();
    stale.x = 999;

    let (state, _) = update(
        state,
        Msg::MoveEmoji {
            emoji: stale,
            offset: Size::new(1.0, 1.0),
        },
    );
    assert_eq!((state.emojis()[0].x, state.emojis()[0].y), (11, 11));
    assert_eq!(state.emojis()[0].text, "🐱");
}

#[test]
fn scale_rounds_half_away_from_zero() {
    let state = add(DocumentState::new(), "🐱", (0, 0), 5.0);
    let emoji = first(&state);

    let (state, _) = update(
        state,
        Msg::ScaleEmoji {
            emoji: emoji.clone(),
            factor: 1.5,
        },
    );
    // 7.5 rounds up.
    assert_eq!(state.emojis()[0].size, 8);

    let (state, _) = update(state, Msg::ScaleEmoji { emoji, factor: 0.3 });
    // 2.4 rounds down.
    assert_eq!(state.emojis()[0].size, 2);
}

#[test]
fn missing_identity_leaves_document_unchanged() {
    let mut state = add(DocumentState::new(), "🐱", (1, 2), 30.0);
    assert!(state.consume_dirty());
    let before = state.document().clone();

    let ghost = Emoji {
        id: 42,
        text: "👻".to_string(),
        x: 1,
        y: 2,
        size: 30,
    };
    let (state, effects) = update(
        state,
        Msg::MoveEmoji {
            emoji: ghost.clone(),
            offset: Size::new(10.0, 10.0),
        },
    );
    assert!(effects.is_empty());
    let (mut state, effects) = update(
        state,
        Msg::ScaleEmoji {
            emoji: ghost,
            factor: 3.0,
        },
    );
    assert!(effects.is_empty());

    assert_eq!(state.document(), &before);
    assert!(!state.consume_dirty());
}

#[test]
fn view_snapshot_matches_state_after_dirty_is_consumed() {
    let mut state = add(DocumentState::new(), "🦊", (3, 4), 24.0);
    let before = state.view();
    assert!(state.consume_dirty());

    let after = state.view();
    assert_eq!(before, after);
    assert_eq!(after.emojis, state.emojis());
}
