use crate::server::{
    config::StopChannelScope,
    error::auth::AuthError,
    middleware::auth::{AuthGuard, Permission},
    testing::{test_config, user_message, ADMIN_ROLE, COMMANDS_CHANNEL, CONSOLE_CHANNEL},
};

/// Tests admin user in the commands channel passes both checks.
///
/// Expected: Ok(Authorized) naming the author
#[test]
fn grants_access_to_admin_in_stop_channel() {
    let config = test_config();
    let message = user_message("!stop", COMMANDS_CHANNEL, &[ADMIN_ROLE]);

    let result = AuthGuard::new(&config, &message)
        .require(&[Permission::StopChannel, Permission::Admin]);

    let authorized = result.unwrap();
    assert_eq!(authorized.actor(), message.author.tag);
}

/// Tests non-admin user is denied.
///
/// Verifies that the guard rejects an author whose member roles do not include the
/// admin role, even in the right channel.
///
/// Expected: Err(AuthError::MissingRole)
#[test]
fn denies_access_to_non_admin_user() {
    let config = test_config();
    let message = user_message("!stop", COMMANDS_CHANNEL, &[7, 8]);

    let result = AuthGuard::new(&config, &message)
        .require(&[Permission::StopChannel, Permission::Admin]);

    assert_eq!(
        result.unwrap_err(),
        AuthError::MissingRole {
            user_id: message.author.id,
            role_id: ADMIN_ROLE,
        }
    );
}

/// Tests admin user outside the stop channel is denied.
///
/// Verifies that the channel check runs first, so an admin in the wrong channel gets the
/// channel denial.
///
/// Expected: Err(AuthError::WrongChannel)
#[test]
fn denies_access_outside_stop_channel() {
    let config = test_config();
    let message = user_message("!stop", CONSOLE_CHANNEL, &[ADMIN_ROLE]);

    let result = AuthGuard::new(&config, &message)
        .require(&[Permission::StopChannel, Permission::Admin]);

    assert!(matches!(result, Err(AuthError::WrongChannel { .. })));
}

/// Tests the console scope variant.
///
/// Expected: console accepted, commands channel rejected
#[test]
fn honors_console_stop_scope() {
    let mut config = test_config();
    config.stop_channel_scope = StopChannelScope::Console;

    let in_console = user_message("!stop", CONSOLE_CHANNEL, &[ADMIN_ROLE]);
    let in_commands = user_message("!stop", COMMANDS_CHANNEL, &[ADMIN_ROLE]);

    assert!(AuthGuard::new(&config, &in_console)
        .require(&[Permission::StopChannel])
        .is_ok());
    assert!(AuthGuard::new(&config, &in_commands)
        .require(&[Permission::StopChannel])
        .is_err());
}

/// Tests the unscoped variant still requires the admin role.
///
/// Expected: channel accepted anywhere, role still enforced
#[test]
fn any_scope_still_requires_admin() {
    let mut config = test_config();
    config.stop_channel_scope = StopChannelScope::Any;

    let admin = user_message("!stop", 12345, &[ADMIN_ROLE]);
    let member = user_message("!stop", 12345, &[]);

    assert!(AuthGuard::new(&config, &admin)
        .require(&[Permission::StopChannel, Permission::Admin])
        .is_ok());
    assert!(matches!(
        AuthGuard::new(&config, &member).require(&[Permission::StopChannel, Permission::Admin]),
        Err(AuthError::MissingRole { .. })
    ));
}
