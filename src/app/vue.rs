// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : expression en attente (petite) + saisie courante (grande)
// - Clavier : chiffres/opérateurs tapés, Enter = "=", Backspace/Delete = DEL, Escape = C
// - Tactile : gros boutons
//
// Chaque clic / frappe devient une `Touche` passée à `appuyer` : une touche, une transition.

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Operateur;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_fonctions(ui);
        ui.add_space(6.0);
        self.ui_pave_numerique(ui);
    }

    /// Touches du clavier physique (ne fait rien si aucune touche pertinente).
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Touche::depuis_texte(t),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Touche::depuis_touche(*key),
                    _ => None,
                })
                .collect()
        });

        for t in touches {
            self.appuyer(t);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let aff = self.affichage();
        let invalide = self.evaluateur.resultat_invalide();
        let en_attente = self.evaluateur.en_attente();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne 1 : "<précédent> <op>" (vide => on garde la hauteur)
                    let expr = if en_attente {
                        aff.expression
                    } else {
                        " ".to_string()
                    };
                    ui.label(
                        egui::RichText::new(expr)
                            .monospace()
                            .size(self.taille_expression)
                            .color(ui.visuals().weak_text_color()),
                    );

                    // ligne 2 : saisie courante (vide juste après un opérateur)
                    let courant = if aff.courant.is_empty() {
                        " ".to_string()
                    } else {
                        aff.courant
                    };
                    let mut texte = egui::RichText::new(courant)
                        .monospace()
                        .size(self.taille_courant);
                    if invalide {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            // fonctions (unaires) puis ^
            let fonctions = Operateur::TOUS.into_iter().filter(|op| op.est_unaire());
            for op in fonctions.chain([Operateur::Puissance]) {
                self.bouton(ui, op.symbole(), Touche::Operation(op), [44.0, 32.0]);
            }
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Effacer, TOUCHE);
                self.bouton(ui, "DEL", Touche::Supprimer, TOUCHE);
                ui.label("");
                self.bouton_op(ui, Operateur::Divise);
                ui.end_row();

                for ligne in [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']] {
                    for c in ligne {
                        self.bouton(ui, &c.to_string(), Touche::Chiffre(c), TOUCHE);
                    }
                    let op = match ligne[0] {
                        '7' => Operateur::Fois,
                        '4' => Operateur::Moins,
                        _ => Operateur::Plus,
                    };
                    self.bouton_op(ui, op);
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre('0'), TOUCHE);
                self.bouton(ui, ".", Touche::Point, TOUCHE);
                ui.label("");
                self.bouton(ui, "=", Touche::Egal, TOUCHE);
                ui.end_row();
            });
    }

    /// Opérateur binaire : reste “enfoncé” tant qu’il est en attente.
    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let actif = self.evaluateur.pending_operator() == Some(op);
        let resp = ui.add_sized(TOUCHE, egui::Button::new(op.symbole()).selected(actif));
        if resp.clicked() {
            self.appuyer(Touche::Operation(op));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, taille: [f32; 2]) {
        let resp = ui.add_sized(taille, egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
