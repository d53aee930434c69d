//! Restaurant profile command handlers.

use savor_core::{Command as CoreCommand, Console, Restaurant, UpdateProfileRequest};

use crate::cli::{GlobalOpts, ProfileArgs, ProfileCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(r: &Restaurant) -> String {
    [
        format!("ID:            {}", r.id),
        format!("Name:          {}", r.name),
        format!("Email:         {}", util::dash(r.email.as_deref())),
        format!("Phone:         {}", util::dash(r.phone.as_deref())),
        format!("Address:       {}", util::dash(r.address.as_deref())),
        format!("Description:   {}", util::dash(r.description.as_deref())),
        format!("Image:         {}", util::dash(r.image_url.as_deref())),
        format!("Opening hours: {}", util::dash(r.opening_hours.as_deref())),
    ]
    .join("\n")
}

pub async fn handle(
    console: &Console,
    args: ProfileArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProfileCommand::Show => {
            let profile = console.profile().await?;
            let out =
                output::render_single(&global.output, &profile, detail, |r| r.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProfileCommand::Update {
            name,
            email,
            phone,
            address,
            description,
            image_url,
            opening_hours,
        } => {
            let update = UpdateProfileRequest {
                name,
                email,
                phone,
                address,
                description,
                image_url,
                opening_hours,
            };
            console.execute(CoreCommand::UpdateProfile(update)).await?;
            if !global.quiet {
                eprintln!("Profile updated");
            }
            Ok(())
        }
    }
}
