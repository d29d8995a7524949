use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use banjara_core::{attachment, Sender, Tab, SUGGESTED_PROMPTS};
use crate::app::{App, FocusPane, InputMode, PathTarget};

const SIDEBAR_WIDTH: u16 = 30;

/// Parse a line of text and convert **bold** markdown to styled spans
fn parse_markdown_line(text: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut chars = text.chars().peekable();
    let mut current_text = String::new();

    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'*') {
            chars.next();

            // Push any accumulated plain text
            if !current_text.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_text)));
            }

            // Find closing **
            let mut bold_text = String::new();
            let mut found_close = false;

            while let Some(c) = chars.next() {
                if c == '*' && chars.peek() == Some(&'*') {
                    chars.next();
                    found_close = true;
                    break;
                }
                bold_text.push(c);
            }

            if found_close && !bold_text.is_empty() {
                spans.push(Span::styled(
                    bold_text,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else {
                // No closing **, treat as literal
                current_text.push_str("**");
                current_text.push_str(&bold_text);
            }
        } else {
            current_text.push(c);
        }
    }

    if !current_text.is_empty() {
        spans.push(Span::raw(current_text));
    }

    Line::from(spans)
}

fn processing_line(label: &str, frame_idx: u8) -> Line<'static> {
    // Animated ellipsis: cycles through ".", "..", "..."
    let dots = ".".repeat((frame_idx as usize) + 1);
    Line::from(Span::styled(
        format!("⟳ Processing {}{}", label, dots),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ))
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    let [sidebar_area, main_area] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(0),
    ])
    .areas(body_area);

    render_sidebar(app, frame, sidebar_area);

    match app.session.tab {
        Tab::Chat => render_chat_screen(app, frame, main_area),
        Tab::Listing => render_listing_screen(app, frame, main_area),
    }

    render_footer(app, frame, footer_area);

    if app.path_prompt.is_some() {
        render_path_prompt(app, frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" BanjaraGPT ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let (mode_text, mode_style) = if app.path_prompt.is_some() {
        (" FILE ", Style::default().bg(Color::Magenta).fg(Color::White))
    } else {
        match (app.session.tab, app.input_mode) {
            (Tab::Chat, InputMode::Editing) => {
                (" EDIT ", Style::default().bg(Color::Yellow).fg(Color::Black))
            }
            (Tab::Chat, InputMode::Normal) => {
                (" CHAT ", Style::default().bg(Color::Blue).fg(Color::White))
            }
            (Tab::Listing, _) => {
                (" LISTING ", Style::default().bg(Color::Green).fg(Color::Black))
            }
        }
    };

    let pairs: Vec<(&str, &str)> = if app.path_prompt.is_some() {
        vec![("Enter", "submit"), ("Esc", "cancel")]
    } else {
        match (app.session.tab, app.input_mode) {
            (Tab::Chat, InputMode::Editing) => vec![("Enter", "send"), ("Esc", "stop typing")],
            (Tab::Chat, InputMode::Normal) => {
                let mut pairs = vec![("i", "type"), ("a", "attach")];
                if app.session.messages.is_empty() {
                    pairs.push(("1-4", "suggest"));
                }
                if app.focus == FocusPane::Sidebar {
                    pairs.extend([("j/k", "chats"), ("Enter", "open")]);
                } else {
                    pairs.push(("j/k", "scroll"));
                }
                pairs.extend([("Tab", "focus"), ("n", "new"), ("l", "listing"), ("q", "quit")]);
                pairs
            }
            (Tab::Listing, _) => vec![
                ("u", "choose image"),
                ("c", "chat"),
                ("n", "new chat"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = vec![
        Span::styled(mode_text, mode_style),
        Span::styled(" ", label_style),
    ];
    for (key, label) in pairs {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {} ", label), label_style));
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().bg(Color::Black).fg(Color::Yellow),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_sidebar(app: &mut App, frame: &mut Frame, area: Rect) {
    let [actions_area, chats_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let listing_style = if app.session.tab == Tab::Listing {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" n ", key_style),
            Span::styled(" + New Chat", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" l ", key_style),
            Span::styled(" 📸 Image to Listing", listing_style),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(actions, actions_area);

    let border_color = if app.focus == FocusPane::Sidebar {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Chats ");

    if app.session.history.is_empty() {
        let empty = Paragraph::new("No chats yet.\nPress n to start one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, chats_area);
        return;
    }

    let items: Vec<ListItem> = app
        .session
        .history
        .iter()
        .map(|chat| {
            let style = if app.session.is_active(&chat.id) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} ", chat.display_title())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chats_area, &mut app.history_state);
}

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    // Store chat area dimensions for scroll calculations (inner size minus borders)
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let border_color = if app.focus == FocusPane::Conversation {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.session.messages.is_empty() {
        app.set_chat_rows(0);
        app.update_chat_scroll();
        let inner = chat_block.inner(chat_area);
        frame.render_widget(chat_block, chat_area);
        render_splash(app, frame, inner);
    } else {
        let chat = Paragraph::new(conversation_lines(app)).wrap(Wrap { trim: false });

        // Measure with the same wrapping the frame will apply
        app.set_chat_rows(chat.line_count(app.chat_width));
        app.update_chat_scroll();

        let chat = chat.block(chat_block).scroll((app.chat_scroll, 0));
        frame.render_widget(chat, chat_area);
    }

    render_composer(app, frame, input_area);
}

fn conversation_lines(app: &App) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for msg in &app.session.messages {
        match msg.sender {
            Sender::User => lines.push(Line::from(Span::styled(
                "You:",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            Sender::Bot => lines.push(Line::from(Span::styled(
                "BanjaraGPT:",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))),
        }

        // Inline image preview sits above the text
        if let Some(url) = &msg.preview_url {
            lines.push(Line::from(Span::styled(
                format!("🖼  {}", url),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::UNDERLINED),
            )));
        }

        if msg.is_uploading {
            lines.push(Line::from(Span::styled(
                msg.text.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        } else if msg.text.is_empty() {
            lines.push(Line::default());
        } else {
            for line in msg.text.lines() {
                lines.push(parse_markdown_line(line));
            }
        }
        lines.push(Line::default());
    }

    if app.session.busy {
        lines.push(processing_line("file", app.animation_frame));
    }

    Text::from(lines)
}

/// Empty-conversation splash with the numbered suggested prompts
fn render_splash(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let mut lines = vec![
        Line::from(Span::styled("BanjaraGPT", Style::default().fg(Color::Cyan).bold())),
        Line::from(Span::styled(
            "Upload a file or try a suggested prompt",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    for (row, pair) in SUGGESTED_PROMPTS.chunks(2).enumerate() {
        let mut spans = Vec::new();
        for (col, prompt) in pair.iter().enumerate() {
            let number = row * 2 + col + 1;
            spans.push(Span::styled(format!(" {} ", number), key_style));
            spans.push(Span::raw(format!(" {:<32}", prompt)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if app.session.current_chat_id.is_none() {
        lines.push(Line::from(Span::styled(
            "Press n to start a chat",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    if app.session.busy {
        lines.push(processing_line("file", app.animation_frame));
    }

    // Vertically center the block of lines
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect::new(area.x, area.y + top, area.width, area.height.saturating_sub(top));

    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(splash, centered);
}

fn render_composer(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing && app.path_prompt.is_none();
    let border_color = if !app.session.can_send() {
        Color::DarkGray
    } else if editing {
        Color::Yellow
    } else {
        Color::Gray
    };

    let title = if app.session.current_chat_id.is_none() {
        " Send disabled: no chat selected "
    } else if app.session.busy {
        " Send disabled: waiting for reply "
    } else {
        " Message (i to type, a to attach) "
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    if app.session.composer.is_empty() && !editing {
        let placeholder = Paragraph::new("Message BanjaraGPT...")
            .style(Style::default().fg(Color::DarkGray))
            .block(input_block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Calculate visible portion of input with horizontal scrolling
    let inner_width = area.width.saturating_sub(2) as usize;
    let (visible_text, cursor_x) =
        visible_window(&app.session.composer, app.composer_cursor, inner_width);

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);
    frame.render_widget(input, area);

    // Show cursor when editing
    if editing {
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

/// Slice of `text` that keeps the cursor visible within `width` columns,
/// plus the cursor's column inside that slice.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, u16) {
    let scroll_offset = if width == 0 {
        0
    } else if cursor >= width {
        cursor - width + 1
    } else {
        0
    };

    let visible: String = text.chars().skip(scroll_offset).take(width).collect();
    (visible, (cursor - scroll_offset) as u16)
}

fn render_listing_screen(app: &App, frame: &mut Frame, area: Rect) {
    let [control_area, preview_area, result_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let control_color = if app.listing.busy { Color::DarkGray } else { Color::Green };
    let control = Paragraph::new(Line::from(vec![
        Span::styled(" u ", Style::default().bg(Color::DarkGray).fg(Color::White)),
        Span::raw(" choose a product image (any image type)"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(control_color))
            .title(" Upload Product Image "),
    );
    frame.render_widget(control, control_area);

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Preview ");
    let preview = match &app.listing.preview {
        Some(path) => Paragraph::new(Line::from(vec![
            Span::raw("🖼  "),
            Span::styled(
                attachment::file_name(path),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", path.display()),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        None => Paragraph::new("No image selected").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(preview.block(preview_block), preview_area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(result) = app.listing.result.as_deref().filter(|r| !r.is_empty()) {
        for line in result.lines() {
            lines.push(parse_markdown_line(line));
        }
    }
    if app.listing.busy {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(processing_line("image", app.animation_frame));
    }

    let result = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Listing "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(result, result_area);
}

fn render_path_prompt(app: &App, frame: &mut Frame, area: Rect) {
    let Some(prompt) = app.path_prompt.as_ref() else {
        return;
    };

    let title = match prompt.target {
        PathTarget::ChatAttachment => format!(
            " Attach a file (.{}) ",
            attachment::CHAT_UPLOAD_EXTENSIONS.join(" .")
        ),
        PathTarget::ListingImage => " Choose a product image ".to_string(),
    };

    // Calculate popup size and position (centered), clipped to the frame
    let popup_width = 70.min(area.width.saturating_sub(4));
    let popup_height = 6.min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // The input row wins when there is no room for the gap below the instructions
    let input_y = if inner.height >= 3 {
        inner.y + 2
    } else {
        inner.bottom() - 1
    };
    if input_y > inner.y {
        let instructions =
            Paragraph::new("Type a file path. Press Enter to submit, Esc to cancel.")
                .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(instructions, Rect::new(inner.x, inner.y, inner.width, 1));
    }

    let input_area = Rect::new(inner.x, input_y, inner.width, 1);
    let (visible_text, cursor_x) =
        visible_window(&prompt.input, prompt.cursor, input_area.width as usize);

    frame.render_widget(
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan)),
        input_area,
    );
    frame.set_cursor_position((input_area.x + cursor_x, input_area.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Outcome;
    use crate::testing::app;
    use banjara_core::{ChatSummary, GatewayError, Message};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::Path;

    /// Draw one frame and return the screen as text, one row per line
    fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn row_of(screen: &[String], needle: &str) -> Option<usize> {
        screen.iter().position(|row| row.contains(needle))
    }

    fn with_chat(app: &mut App) {
        app.apply_outcome(Outcome::ChatCreated(Ok(ChatSummary {
            id: "c1".into(),
            title: Some("Invoices".into()),
        })));
    }

    #[test]
    fn word_wrapped_reply_scrolls_to_its_last_word() {
        let (mut app, _rx) = app();
        with_chat(&mut app);
        app.session.messages.push(Message::bot(
            "aaaaaa bbbbbb cccccc dddddd eeeeee ffffff gggggg hhhhhh iiiiii jjjjjj",
        ));

        // Ten columns inside the border: every word takes its own row
        let screen = draw(&mut app, 42, 12);
        assert!(row_of(&screen, "jjjjjj").is_some(), "{screen:#?}");
        assert!(row_of(&screen, "iiiiii").is_some());
        assert!(row_of(&screen, "aaaaaa").is_none());
    }

    #[test]
    fn long_prose_reply_keeps_tail_visible_and_reachable() {
        let (mut app, _rx) = app();
        with_chat(&mut app);
        app.session.messages.push(Message::user("Describe the product"));
        let mut prose = "handwoven cotton tote with leather straps and a brass clasp. "
            .repeat(125);
        prose.push_str("FINALWORD");
        app.session.messages.push(Message::bot(prose));

        let screen = draw(&mut app, 120, 30);
        assert!(row_of(&screen, "FINALWORD").is_some());

        for _ in 0..3 {
            app.scroll_up();
        }
        let screen = draw(&mut app, 120, 30);
        assert!(row_of(&screen, "FINALWORD").is_none());

        for _ in 0..3 {
            app.scroll_down();
        }
        assert!(app.follow_tail);
        let screen = draw(&mut app, 120, 30);
        assert!(row_of(&screen, "FINALWORD").is_some());
    }

    #[test]
    fn empty_conversation_offers_all_suggested_prompts() {
        let (mut app, _rx) = app();
        with_chat(&mut app);

        let screen = draw(&mut app, 120, 30);
        for prompt in SUGGESTED_PROMPTS {
            assert!(row_of(&screen, prompt).is_some(), "missing {prompt:?}");
        }
    }

    #[test]
    fn preview_url_renders_above_message_text() {
        let (mut app, _rx) = app();
        with_chat(&mut app);
        let mut reply = Message::bot("Invoice total is $40");
        reply.preview_url = Some("https://cdn.test/inv.png".into());
        app.session.messages.push(reply);

        let screen = draw(&mut app, 100, 20);
        let url = row_of(&screen, "https://cdn.test/inv.png").unwrap();
        let text = row_of(&screen, "Invoice total is $40").unwrap();
        assert!(url < text);
    }

    #[test]
    fn processing_line_sits_below_last_message_while_busy() {
        let (mut app, _rx) = app();
        with_chat(&mut app);
        app.session.messages.push(Message::user("Hello there"));
        app.session.busy = true;

        let screen = draw(&mut app, 100, 20);
        let message = row_of(&screen, "Hello there").unwrap();
        let processing = row_of(&screen, "Processing file").unwrap();
        assert!(processing > message);

        app.session.busy = false;
        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Processing file").is_none());
    }

    #[test]
    fn composer_title_shows_why_send_is_disabled() {
        let (mut app, _rx) = app();
        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Send disabled: no chat selected").is_some());

        with_chat(&mut app);
        app.session.busy = true;
        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Send disabled: waiting for reply").is_some());

        app.session.busy = false;
        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Send disabled").is_none());
        assert!(row_of(&screen, "Message (i to type, a to attach)").is_some());
    }

    #[test]
    fn listing_view_shows_preview_progress_and_result() {
        let (mut app, _rx) = app();
        app.show_tab(Tab::Listing);
        app.listing.begin(Path::new("/tmp/shoe.png"));

        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Upload Product Image").is_some());
        assert!(row_of(&screen, "/tmp/shoe.png").is_some());
        assert!(row_of(&screen, "Processing image").is_some());

        app.listing
            .finish(Ok::<_, GatewayError>("Leather shoe, size 9, $40".to_string()));
        let screen = draw(&mut app, 100, 20);
        assert!(row_of(&screen, "Leather shoe, size 9, $40").is_some());
        assert!(row_of(&screen, "Processing image").is_none());
        assert!(row_of(&screen, "shoe.png").is_some());
    }

    #[test]
    fn path_prompt_fits_short_terminals() {
        let (mut app, _rx) = app();
        with_chat(&mut app);
        app.open_path_prompt(PathTarget::ChatAttachment);
        app.path_prompt.as_mut().unwrap().input = "notes.pdf".into();

        let screen = draw(&mut app, 80, 4);
        assert!(row_of(&screen, "notes.pdf").is_some());

        draw(&mut app, 80, 2);
        draw(&mut app, 20, 1);
    }

    #[test]
    fn markdown_bold_becomes_styled_span() {
        let line = parse_markdown_line("Price: **$40** each");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "$40");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unclosed_bold_stays_literal() {
        let line = parse_markdown_line("a **b");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a **b");
    }

    #[test]
    fn visible_window_follows_cursor() {
        assert_eq!(visible_window("hello", 2, 10), ("hello".to_string(), 2));
        assert_eq!(visible_window("abcdefgh", 8, 4), ("fgh".to_string(), 3));
        assert_eq!(visible_window("abc", 0, 0), (String::new(), 0));
    }
}
