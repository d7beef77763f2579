pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #d7e4f5;
      --ink: #2b2a28;
      --accent: #4a7dff;
      --accent-2: #2f4858;
      --good: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e9f0fb 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    h1 {
      font-family: 'Fraunces', 'Georgia', serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .date-nav {
      display: flex;
      align-items: center;
      gap: 12px;
      flex-wrap: wrap;
    }

    .date-nav .label {
      font-weight: 600;
      color: var(--accent-2);
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.15rem;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.ghost {
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
    }

    .item {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 14px 16px;
      margin-bottom: 10px;
      display: grid;
      gap: 8px;
    }

    .item .row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .item .name {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 500;
    }

    .item.done .name {
      text-decoration: line-through;
      opacity: 0.6;
    }

    .check {
      width: 22px;
      height: 22px;
      border-radius: 7px;
      border: 2px solid var(--accent-2);
      cursor: pointer;
      flex: none;
    }

    .check.on {
      background: var(--good);
      border-color: var(--good);
    }

    .time {
      font-size: 0.85rem;
      color: #8b857d;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
    }

    .bar .fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
    }

    .goal-info {
      font-size: 0.85rem;
      color: #6b645d;
    }

    .member {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
      color: #5f5c57;
    }

    .dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: rgba(47, 72, 88, 0.2);
      flex: none;
    }

    .dot.on {
      background: var(--good);
    }

    .member .days {
      margin-left: auto;
      font-size: 0.8rem;
      color: #8b857d;
    }

    details {
      background: rgba(47, 72, 88, 0.05);
      border-radius: 16px;
      padding: 12px 16px;
    }

    summary {
      cursor: pointer;
      font-weight: 600;
      color: var(--accent-2);
    }

    form {
      display: grid;
      gap: 10px;
      margin-top: 12px;
    }

    form .field {
      display: flex;
      align-items: center;
      gap: 10px;
      flex-wrap: wrap;
    }

    input[type='text'],
    input[type='time'],
    input[type='number'],
    select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 8px 10px;
      font: inherit;
    }

    input[type='number'] {
      width: 80px;
    }

    .empty {
      opacity: 0.6;
      text-align: center;
      padding: 16px;
      font-size: 0.95rem;
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.2em;
      color: #6b645d;
    }

    .status[data-type='error'] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <div class="date-nav">
        <button class="ghost" id="prev-day">&lsaquo;</button>
        <button class="ghost" id="today-btn">Today</button>
        <button class="ghost" id="next-day">&rsaquo;</button>
        <span class="label" id="current-date"></span>
      </div>
    </header>

    <section>
      <h2>Daily habits</h2>
      <div id="daily-list"></div>
      <details>
        <summary>Add habit</summary>
        <form id="habit-form">
          <div class="field">
            <input type="text" id="habit-name" placeholder="Name" required />
            <input type="text" id="habit-emoji" placeholder="Emoji" size="4" />
            <select id="habit-kind">
              <option value="daily">Daily</option>
              <option value="anytime">Anytime</option>
            </select>
          </div>
          <div class="field">
            <label><input type="checkbox" id="habit-scheduled" /> Scheduled</label>
            <input type="time" id="habit-time" />
          </div>
          <div class="field">
            <label><input type="checkbox" id="goal-weekly" /> Weekly target</label>
            <input type="number" id="goal-weekly-target" min="1" value="5" />
          </div>
          <div class="field">
            <label><input type="checkbox" id="goal-streak" /> Streak target</label>
            <input type="number" id="goal-streak-target" min="1" value="30" />
          </div>
          <div class="field">
            <label><input type="checkbox" id="goal-monthly" /> Monthly target</label>
            <input type="number" id="goal-monthly-target" min="1" value="20" />
          </div>
          <div class="field">
            <button type="submit">Save habit</button>
          </div>
        </form>
      </details>
    </section>

    <section>
      <h2>Grouped goals</h2>
      <div id="group-list"></div>
      <details>
        <summary>Add grouped goal</summary>
        <form id="group-form">
          <div class="field">
            <input type="text" id="group-name" placeholder="Name" required />
            <input type="text" id="group-emoji" placeholder="Emoji" size="4" />
          </div>
          <div class="field">
            <select id="group-kind">
              <option value="aggregate">Aggregate</option>
              <option value="combined">Combined</option>
              <option value="mutual_exclusion">Mutual exclusion</option>
            </select>
            <select id="group-period">
              <option value="week">Week</option>
              <option value="month">Month</option>
            </select>
            <input type="number" id="group-target" min="1" value="5" />
          </div>
          <div class="field" id="group-members"></div>
          <div class="field">
            <button type="submit">Save grouped goal</button>
          </div>
        </form>
      </details>
    </section>

    <section>
      <h2>Anytime tasks</h2>
      <div id="anytime-list"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const dateEl = document.getElementById('current-date');
    const dailyEl = document.getElementById('daily-list');
    const groupEl = document.getElementById('group-list');
    const anytimeEl = document.getElementById('anytime-list');
    const membersEl = document.getElementById('group-members');
    const statusEl = document.getElementById('status');

    let asOf = null; // null means today
    let overview = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const longDate = (iso) =>
      new Date(iso + 'T00:00:00').toLocaleDateString('en-US', {
        weekday: 'long',
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });

    const weekday = (iso) =>
      new Date(iso + 'T00:00:00').toLocaleDateString('en-US', { weekday: 'short' });

    const shiftDate = (iso, delta) => {
      const d = new Date(iso + 'T00:00:00Z');
      d.setUTCDate(d.getUTCDate() + delta);
      return d.toISOString().slice(0, 10);
    };

    const label = (habit) => (habit.emoji ? habit.emoji + ' ' : '') + habit.name;

    const goalText = (goal) => {
      if (goal.kind === 'weekly') return goal.current + '/' + goal.target + ' times this week';
      if (goal.kind === 'monthly') return goal.current + '/' + goal.target + ' times this month';
      return goal.current + '-day streak (Goal: ' + goal.target + ' days)';
    };

    const habitItem = (habit) => {
      const goals = habit.goals
        .map(
          (goal) =>
            '<div class="bar"><div class="fill" style="width:' + goal.percentage + '%"></div></div>' +
            '<div class="goal-info">' + goalText(goal) + '</div>'
        )
        .join('');
      const time = habit.scheduled_time ? '<span class="time">' + habit.scheduled_time + '</span>' : '';
      return (
        '<div class="item' + (habit.completed ? ' done' : '') + '">' +
        '<div class="row"><span class="name">' +
        '<span class="check' + (habit.completed ? ' on' : '') + '" data-toggle="' + habit.id + '"></span>' +
        label(habit) + '</span>' + time + '</div>' + goals + '</div>'
      );
    };

    const groupItem = (group) => {
      const text =
        group.kind === 'mutual_exclusion'
          ? group.current + '-day streak'
          : group.current + '/' + group.target + ' this ' + group.period;
      const members = group.members
        .map((member) => {
          const days = member.completed_days.map(weekday).join(', ') || '&mdash;';
          return (
            '<div class="member"><span class="dot' + (member.completed ? ' on' : '') + '"></span>' +
            label(member) + '<span class="days">' + days + '</span></div>'
          );
        })
        .join('');
      return (
        '<div class="item"><div class="row"><span class="name">' + label(group) + '</span>' +
        '<span class="goal-info">' + text + '</span></div>' +
        '<div class="bar"><div class="fill" style="width:' + group.percentage + '%"></div></div>' +
        members + '</div>'
      );
    };

    const render = () => {
      dateEl.textContent = (overview.today ? 'Today - ' : '') + longDate(overview.date);

      const daily = overview.habits.filter((habit) => habit.kind === 'daily');
      dailyEl.innerHTML = daily.length
        ? daily.map(habitItem).join('')
        : '<p class="empty">No daily habits yet.</p>';

      groupEl.innerHTML = overview.groups.length
        ? overview.groups.map(groupItem).join('')
        : '<p class="empty">No grouped goals yet.</p>';

      const anytime = overview.habits.filter((habit) => habit.kind === 'anytime');
      anytimeEl.innerHTML = anytime.length
        ? anytime.map(habitItem).join('')
        : '<p class="empty">No anytime tasks yet.</p>';

      membersEl.innerHTML = daily
        .map(
          (habit) =>
            '<label><input type="checkbox" name="member" value="' + habit.id + '" /> ' +
            label(habit) + '</label>'
        )
        .join('');

      document.querySelectorAll('[data-toggle]').forEach((el) => {
        el.addEventListener('click', () => toggle(el.dataset.toggle));
      });
    };

    const load = async () => {
      const query = asOf ? '?date=' + asOf : '';
      const res = await fetch('/api/overview' + query);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      overview = await res.json();
      render();
    };

    const toggle = async (id) => {
      const res = await fetch('/api/habits/' + id + '/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: overview.date })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      load().catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('prev-day').addEventListener('click', () => {
      asOf = shiftDate(overview.date, -1);
      load().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-day').addEventListener('click', () => {
      asOf = shiftDate(overview.date, 1);
      load().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('today-btn').addEventListener('click', () => {
      asOf = null;
      load().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('habit-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const goals = [];
      if (document.getElementById('goal-weekly').checked) {
        goals.push({ kind: 'weekly', target: Number(document.getElementById('goal-weekly-target').value) });
      }
      if (document.getElementById('goal-streak').checked) {
        goals.push({ kind: 'streak', target: Number(document.getElementById('goal-streak-target').value) });
      }
      if (document.getElementById('goal-monthly').checked) {
        goals.push({ kind: 'monthly', target: Number(document.getElementById('goal-monthly-target').value) });
      }
      const res = await fetch('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          name: document.getElementById('habit-name').value,
          emoji: document.getElementById('habit-emoji').value,
          kind: document.getElementById('habit-kind').value,
          scheduled: document.getElementById('habit-scheduled').checked,
          scheduled_time: document.getElementById('habit-time').value,
          goals
        })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      event.target.reset();
      setStatus('Habit saved', '');
      load().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('group-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const habitIds = Array.from(
        document.querySelectorAll('#group-members input:checked')
      ).map((input) => input.value);
      const res = await fetch('/api/groups', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          name: document.getElementById('group-name').value,
          emoji: document.getElementById('group-emoji').value,
          kind: document.getElementById('group-kind').value,
          period: document.getElementById('group-period').value,
          target: Number(document.getElementById('group-target').value),
          habit_ids: habitIds
        })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      event.target.reset();
      setStatus('Grouped goal saved', '');
      load().catch((err) => setStatus(err.message, 'error'));
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
