use iced::{
    Color, Element, Theme,
    Alignment::Center,
    widget::{Image, column, container, container::Style, image::Handle, text},
};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

const LOGO_SIZE: u32 = 96;
const LOGO_COLOR: Rgba<u8> = Rgba([97, 218, 251, 255]);

/// Draws the shell logo into an in-memory raster: a ring with a filled hub.
/// Generated once at mount, so the window never waits on asset I/O.
pub fn logo_handle() -> Handle {
    let mut canvas = RgbaImage::from_pixel(LOGO_SIZE, LOGO_SIZE, Rgba([0, 0, 0, 0]));
    let center = (LOGO_SIZE as i32 / 2, LOGO_SIZE as i32 / 2);

    // Stack three hollow circles for a ring thick enough to survive scaling.
    for radius in [44, 43, 42] {
        draw_hollow_circle_mut(&mut canvas, center, radius, LOGO_COLOR);
    }
    draw_filled_circle_mut(&mut canvas, center, 10, LOGO_COLOR);

    Handle::from_rgba(LOGO_SIZE, LOGO_SIZE, canvas.into_raw())
}

fn banner(theme: &Theme) -> Style {
    // Darkened band behind the header content
    let mut color_rgba = theme.palette().background.into_rgba8();
    color_rgba[0] /= 2;
    color_rgba[1] /= 2;
    color_rgba[2] /= 2;

    Style {
        background: Some(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]).into()),
        text_color: Some(theme.palette().text),
        ..Style::default()
    }
}

pub fn shell_layout<'a, Message>(
    logo: &Handle,
    heading: &'a str,
    controls: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            Image::new(logo.clone()).width(96).height(96),
            text(heading).size(24),
            controls.into(),
        ]
        .spacing(20)
        .padding(32)
        .align_x(Center),
    )
    .style(banner)
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
