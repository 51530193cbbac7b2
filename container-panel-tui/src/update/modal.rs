//! 弹窗更新逻辑

use container_panel_core::types::PanelUser;
use container_panel_core::validation::{validate_signup, Field, SignupForm};

use crate::message::ModalMessage;
use crate::model::state::{DestructiveAction, Modal, NEW_USER_FIELD_COUNT};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::NewUser { .. } => handle_new_user(app, msg),
        Modal::ConfirmAction { .. } => handle_confirm_action(app, msg),
        Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 表单字段对应的焦点索引
fn field_index(field: Field) -> usize {
    match field {
        Field::Username => 0,
        Field::Email => 1,
        Field::Password => 2,
    }
}

/// 处理新建用户表单弹窗
fn handle_new_user(app: &mut App, msg: ModalMessage) {
    let Some(Modal::NewUser {
        ref mut username,
        ref mut email,
        ref mut password,
        ref mut focus,
        ref mut show_password,
        ref mut errors,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % NEW_USER_FIELD_COUNT;
            // 字段获得焦点时清除其错误标记（一次性重置）
            errors[*focus] = None;
        }

        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = NEW_USER_FIELD_COUNT - 1;
            } else {
                *focus -= 1;
            }
            errors[*focus] = None;
        }

        ModalMessage::Confirm => {
            let form = SignupForm {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
            };
            let field_errors = validate_signup(&form);

            if field_errors.is_empty() {
                let user = PanelUser::new(username.clone(), email.clone());
                let created_name = user.username.clone();

                app.modal.close();
                app.users.add_user(user);
                app.set_status(format!("User \"{created_name}\" created"));
            } else {
                // 提交被阻止：标记所有违规字段，焦点回到第一个违规字段
                for err in &field_errors {
                    errors[field_index(err.field)] = Some(err.message.clone());
                }
                *focus = field_index(field_errors[0].field);
            }
        }

        ModalMessage::Input(ch) => {
            // 根据焦点输入字符
            match *focus {
                0 => username.push(ch),
                1 => email.push(ch),
                2 => password.push(ch),
                _ => {}
            }
        }

        ModalMessage::Backspace => {
            match *focus {
                0 => username.pop(),
                1 => email.pop(),
                2 => password.pop(),
                _ => None,
            };
        }

        ModalMessage::TogglePassword => {
            *show_password = !*show_password;
        }

        ModalMessage::ToggleButtonFocus => {
            // 不适用于此弹窗
        }
    }
}

/// 处理确认操作对话框
fn handle_confirm_action(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmAction {
        action,
        ref target_name,
        ref target_id,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleButtonFocus | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                // 确认执行
                let target_name = target_name.clone();
                let target_id = target_id.clone();

                app.modal.close();
                execute_action(app, action, &target_id, &target_name);
            } else {
                // 取消
                app.modal.close();
                app.clear_status();
            }
        }

        _ => {}
    }
}

/// 执行已确认的不可撤销操作
fn execute_action(app: &mut App, action: DestructiveAction, target_id: &str, target_name: &str) {
    match action {
        DestructiveAction::StopContainer => {
            if app.containers.stop_by_id(target_id) {
                app.set_status(format!("Stopped container: \"{target_name}\""));
            }
        }
        DestructiveAction::DeleteContainer => {
            if app.containers.delete_by_id(target_id).is_some() {
                app.set_status(format!("Deleted container: \"{target_name}\""));
            }
        }
        DestructiveAction::DeleteUser => {
            if app.users.delete_by_id(target_id).is_some() {
                app.set_status(format!("Deleted user: \"{target_name}\""));
            }
        }
    }
}

/// 处理简单弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        _ => {}
    }
}
