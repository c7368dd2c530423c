pub const RETRO_WINDOW_STYLES: &str = r#"
/* Window frame. Unset inline geometry falls back to these values. */
.retro-window {
    box-sizing: border-box;
    position: absolute;
    left: 24px;
    top: 24px;
    width: 420px;
    height: 300px;
    display: flex;
    flex-direction: column;
    background: var(--retro-window-bg, #c0c0c0);
    border: 2px solid;
    border-color: #ffffff #404040 #404040 #ffffff;
    box-shadow: 1px 1px 0 #000000;
    font-family: 'MS Sans Serif', Tahoma, sans-serif;
    font-size: 12px;
    overflow: hidden;
}

.retro-window[data-layout="maximized"] {
    border: none;
    box-shadow: none;
}

/* Titlebar */
.retro-window .titlebar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
    padding: 2px 3px 2px 6px;
    background: linear-gradient(90deg, var(--retro-titlebar-from, #000080), var(--retro-titlebar-to, #1084d0));
    color: #ffffff;
    font-weight: bold;
    cursor: grab;
    user-select: none;
    flex-shrink: 0;
}

.retro-window[data-layout="dragging"] .titlebar {
    cursor: grabbing;
}

.retro-window .title {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.retro-window .buttons {
    display: flex;
    gap: 2px;
}

.retro-window .buttons button {
    width: 18px;
    height: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0;
    background: #c0c0c0;
    color: #000000;
    border: 1px solid;
    border-color: #ffffff #404040 #404040 #ffffff;
    font-size: 11px;
    line-height: 1;
    cursor: pointer;
}

.retro-window .buttons button:active {
    border-color: #404040 #ffffff #ffffff #404040;
}

/* Content slot */
.retro-window .content {
    flex: 1;
    min-height: 0;
    margin: 3px;
    padding: 6px;
    background: #ffffff;
    border: 1px solid;
    border-color: #404040 #ffffff #ffffff #404040;
    overflow: auto;
}

/* Resize handle */
.retro-window .resize-handle {
    position: absolute;
    right: 0;
    bottom: 0;
    width: 14px;
    height: 14px;
    cursor: se-resize;
    background: linear-gradient(135deg, transparent 50%, #808080 50%, #808080 60%, transparent 60%, transparent 75%, #808080 75%, #808080 85%, transparent 85%);
}
"#;
