//! Client-side checks for the login and signup forms. Nothing here touches
//! the network.

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("名前は必須です".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("メールアドレスは必須です".to_string());
    }
    if !is_well_formed_email(email) {
        return Err("有効なメールアドレスを入力してください".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("パスワードは必須です".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "パスワードは{}文字以上で入力してください",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// `local@domain.tld`: local part of `[A-Za-z0-9._%+-]`, domain of
/// `[A-Za-z0-9.-]`, alphabetic TLD of two or more letters.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        && !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
