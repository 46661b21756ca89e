//! Render orchestration: one function per scene.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CreateStage, Scene, MAX_NAME_LEN};
use crate::ui::art;
use crate::ui::layout::{centered_rect_fixed, BattleLayout, MenuLayout};
use crate::ui::widgets::{BattleLogWidget, MenuWidget, StatPanelWidget};

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.scene {
        Scene::MainMenu => render_main_menu(frame, app, area),
        Scene::HeroSelect => render_hero_select(frame, app, area),
        Scene::HeroCreate => render_hero_create(frame, app, area),
        Scene::LevelSelect => render_level_select(frame, app, area),
        Scene::Battle => render_battle(frame, app, area),
        Scene::Victory => render_victory(frame, app, area),
        Scene::GameOver => render_game_over(frame, app, area),
    }
}

fn render_main_menu(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MenuLayout::calculate(area);
    render_banner(frame, app, layout.header);

    let mut lines: Vec<Line> = art::EMBLEM
        .iter()
        .map(|row| Line::styled(*row, app.theme.hint_style()).alignment(Alignment::Center))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("[1] Play").alignment(Alignment::Center));
    lines.push(Line::from("[2] Quit").alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(lines), layout.body);
    render_status(frame, app, layout.status);
}

fn render_hero_select(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MenuLayout::calculate(area);
    render_banner(frame, app, layout.header);

    let mut lines: Vec<Line> = Vec::new();
    for (index, (_, hero)) in app.session.roster().iter().enumerate() {
        lines.push(Line::from(format!("{}) {hero}", index + 1)));
    }
    if !app.session.roster().is_full() {
        lines.push(Line::from(format!(
            "{}) Forge a new hero [+]",
            app.session.roster().len() + 1
        )));
    }

    let menu = MenuWidget::new("Choose Your Hero", lines, &app.theme)
        .hint("Press a number to choose · Esc to go back");
    frame.render_widget(menu, layout.body);
    render_status(frame, app, layout.status);
}

fn render_hero_create(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MenuLayout::calculate(area);
    render_banner(frame, app, layout.header);

    let lines = match app.creation.stage {
        CreateStage::Name => vec![
            Line::from("Name your hero:"),
            Line::from(""),
            Line::styled(
                format!("  {}_", app.creation.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                format!("(up to {MAX_NAME_LEN} characters, Enter to confirm)"),
                app.theme.hint_style(),
            ),
        ],
        CreateStage::Class => vec![
            Line::from(format!("Choose a class for {}:", app.creation.name)),
            Line::from(""),
            Line::from("[1] Warrior   sturdy, crushing blows"),
            Line::from("[2] Archer    quick, keen shots"),
            Line::from("[3] Mage      frail, deep reserves"),
        ],
    };

    let menu = MenuWidget::new("A Hero Is Forged", lines, &app.theme)
        .hint("Esc to go back");
    frame.render_widget(menu, layout.body);
    render_status(frame, app, layout.status);
}

fn render_level_select(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MenuLayout::calculate(area);
    render_banner(frame, app, layout.header);

    let mut lines: Vec<Line> = Vec::new();
    for (index, level) in app.session.levels().iter().enumerate() {
        let status = if level.has_won() {
            "Completed"
        } else {
            "Not completed"
        };
        lines.push(Line::from(format!(
            "{}) {:<28}  {status}",
            index + 1,
            level.name()
        )));
    }
    if let Some(hero) = app.session.active_hero_character() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Playing as {hero}"),
            app.theme.hint_style(),
        ));
    }

    let menu = MenuWidget::new("Choose a Level", lines, &app.theme)
        .hint("Press a number to fight · Esc to go back");
    frame.render_widget(menu, layout.body);
    render_status(frame, app, layout.status);
}

fn render_battle(frame: &mut Frame, app: &App, area: Rect) {
    let Some(level) = app.current_level.and_then(|i| app.session.level(i)) else {
        return;
    };
    let layout = BattleLayout::calculate(area);

    let title = Line::styled(format!(" {} ", level.name()), app.theme.title_style());
    frame.render_widget(Paragraph::new(title), layout.title);

    frame.render_widget(BattleLogWidget::new(&app.battle_log, &app.theme), layout.log);

    if let Some(hero) = app.session.active_hero_character() {
        frame.render_widget(StatPanelWidget::new(hero, &app.theme), layout.hero_panel);
    }
    frame.render_widget(
        StatPanelWidget::new(level.enemy(), &app.theme),
        layout.enemy_panel,
    );

    let prompt = Paragraph::new("[1] Attack   [2] Recover   [3] Flee").block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(prompt, layout.prompt);

    render_status(frame, app, layout.status);
}

fn render_victory(frame: &mut Frame, app: &App, area: Rect) {
    let Some(level) = app.current_level.and_then(|i| app.session.level(i)) else {
        return;
    };

    let popup = centered_rect_fixed(60, 12, area);
    let block = Block::default()
        .title(" Victory ")
        .title_style(app.theme.title_style())
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());

    let lines = vec![
        Line::styled(
            format!("The {} is defeated!", level.enemy().name()),
            app.theme.title_style(),
        ),
        Line::from(""),
        Line::from(level.epilogue()),
        Line::from(""),
        Line::styled("Press any key to continue", app.theme.hint_style()),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

fn render_game_over(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from(""); 2];
    for row in art::GAME_OVER {
        lines.push(Line::styled(*row, app.theme.danger_style()).alignment(Alignment::Center));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from("Your hero has fallen.")
            .alignment(Alignment::Center),
    );
    lines.push(
        Line::styled(
            "Press any key to return to the main menu",
            app.theme.hint_style(),
        )
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = art::TITLE
        .iter()
        .map(|row| Line::styled(*row, app.theme.title_style()).alignment(Alignment::Center))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.status() {
        frame.render_widget(
            Paragraph::new(Line::styled(message, app.theme.status_style())),
            area,
        );
    }
}
