// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression (grande) + aperçu (petit, seulement s’il existe)
// - Pavé 5×4, gros boutons (tactile)
//
// Note :
// - L’effet “enfoncé” des boutons est géré par egui (état de vue éphémère);
//   le moteur ne le voit jamais.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::moteur::DIGITS_MAX;
use crate::noyau::{Operateur, Touche};

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

const ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 149, 0);
const GRIS_CLAIR: egui::Color32 = egui::Color32::from_rgb(165, 165, 165);
const GRIS_FONCE: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);

/// Disposition du pavé, ligne par ligne.
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::ToutEffacer,
        Touche::Signe,
        Touche::Effacer,
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Operateur(Operateur::Pourcent),
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        ui.vertical_centered(|ui| {
            self.ui_ecran(ui);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);

            self.ui_pave(ui);

            ui.add_space(12.0);
            self.ui_reglages(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let largeur = TAILLE_BOUTON[0] * 4.0 + ui.spacing().item_spacing.x * 3.0;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.set_min_height(110.0);

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let mut texte = egui::RichText::new(self.expression())
                        .size(40.0)
                        .monospace();
                    if self.est_en_erreur() {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);

                    // Aperçu : rien du tout quand il est absent
                    if let Some(apercu) = self.apercu() {
                        ui.label(egui::RichText::new(apercu).size(22.0).monospace().weak());
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let (fond, encre) = couleurs(touche);
        let label = egui::RichText::new(touche.symbole())
            .size(22.0)
            .strong()
            .color(encre);

        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label).fill(fond));
        if resp.clicked() {
            self.touche(touche);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Précision :");
            let mut d = self.digits() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }
}

fn couleurs(touche: Touche) -> (egui::Color32, egui::Color32) {
    match touche {
        Touche::Operateur(_) | Touche::Egal => (ORANGE, egui::Color32::WHITE),
        Touche::ToutEffacer | Touche::Signe | Touche::Effacer => (GRIS_CLAIR, egui::Color32::BLACK),
        Touche::Chiffre(_) | Touche::Point => (GRIS_FONCE, egui::Color32::WHITE),
    }
}
