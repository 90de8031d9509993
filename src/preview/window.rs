// pixie-edit/src/preview/window.rs
use super::Preview;
use crate::core::{EditorError, Image, Result};
use eframe::egui;

/// Native preview window. Each `show` runs its own event loop and returns
/// once a key is pressed or the window is closed.
#[derive(Debug, Default)]
pub struct WindowPreview;

impl WindowPreview {
    pub fn new() -> Self {
        Self
    }
}

impl Preview for WindowPreview {
    fn show(&mut self, title: &str, image: &Image) -> Result<()> {
        let (width, height) = image.dimensions();
        let pixels = image.to_rgb8();
        let color_image =
            egui::ColorImage::from_rgb([width as usize, height as usize], pixels.as_raw());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([width.max(64) as f32, height.max(64) as f32]),
            run_and_return: true,
            ..Default::default()
        };

        log::debug!("Opening preview window {:?}", title);

        let title_owned = title.to_string();
        eframe::run_native(
            title,
            options,
            Box::new(move |cc| {
                let texture = cc.egui_ctx.load_texture(
                    title_owned,
                    color_image,
                    egui::TextureOptions::NEAREST,
                );
                Ok(Box::new(PreviewApp { texture }))
            }),
        )
        .map_err(|e| EditorError::Preview(e.to_string()))
    }
}

struct PreviewApp {
    texture: egui::TextureHandle,
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|event| matches!(event, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let sized = egui::load::SizedTexture::from_handle(&self.texture);
                ui.add(egui::Image::from_texture(sized).shrink_to_fit());
            });
    }
}
