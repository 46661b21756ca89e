//! ASCII art for the menu and game-over screens.

/// Title banner shown on the main menu.
pub const TITLE: &[&str] = &[
    r"    _    ____  _   _ _____ _   _ _____ _____ _     _     ",
    r"   / \  / ___|| | | | ____| \ | |  ___| ____| |   | |    ",
    r"  / _ \ \___ \| |_| |  _| |  \| | |_  |  _| | |   | |    ",
    r" / ___ \ ___) |  _  | |___| |\  |  _| | |___| |___| |___ ",
    r"/_/   \_\____/|_| |_|_____|_| \_|_|   |_____|_____|_____|",
];

/// Emblem under the title.
pub const EMBLEM: &[&str] = &[
    r"        /\        ",
    r"        ||        ",
    r"        ||        ",
    r"   _____||_____   ",
    r"  '-----..-----'  ",
    r"        ||        ",
    r"        ||        ",
    r"        \/        ",
];

/// Banner for the defeat screen.
pub const GAME_OVER: &[&str] = &[
    r"  ____    _    __  __ _____    _____     _______ ____  ",
    r" / ___|  / \  |  \/  | ____|  / _ \ \   / / ____|  _ \ ",
    r"| |  _  / _ \ | |\/| |  _|   | | | \ \ / /|  _| | |_) |",
    r"| |_| |/ ___ \| |  | | |___  | |_| |\ V / | |___|  _ < ",
    r" \____/_/   \_\_|  |_|_____|  \___/  \_/  |_____|_| \_\",
];
