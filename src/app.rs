// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en touches du pavé
//
// Clavier :
// - caractères tapés : même frontière que le pavé (Touche::depuis_symbole),
//   tout symbole hors pavé est ignoré
// - Enter = "=", Backspace = "del", Escape = "C" (via AppCalc::clear)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Touches spéciales du clavier physique (Escape : voir AppCalc::clear).
fn touche_speciale(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Effacer),
        _ => None,
    }
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        for ev in events {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        // hors pavé : refus journalisé par symbole(), puis ignoré
                        self.symbole(c.encode_utf8(&mut [0; 4])).ok();
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => self.clear(),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(t) = touche_speciale(key) {
                        self.touche(t);
                    }
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Un seul tour de traitement par frame : chaque touche va au bout
        // (édition + aperçu) avant la suivante.
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
